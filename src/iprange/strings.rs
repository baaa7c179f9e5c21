// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DASH: char = '-';
pub(crate) static SLASH: char = '/';
pub(crate) static RANGE_SEP: &str = " - ";

// mod.rs
pub(crate) static ERR_RANGE_NOT_ALLOWED: &str = "IP address ranges are not allowed";
pub(crate) static ERR_CIDR_NOT_ALLOWED: &str = "IP addresses with CIDR mask are not allowed";
pub(crate) static ERR_INVALID_MASK: &str = "the provided network mask is not valid";
pub(crate) static ERR_NO_BASE: &str = "no base IP set";
pub(crate) static ERR_INVALID_IP: &str = "invalid IP provided";
pub(crate) static ERR_INVALID_END: &str = "invalid IP range provided";
pub(crate) static ERR_MISMATCH: &str = "cannot mix IPv4 and IPv6 in range";
pub(crate) static ERR_RNG_ORDER: &str = "start IP is greater than end IP";
pub(crate) static ERR_INVALID_LEN: &str = "binary address must be 4 or 16 bytes, got";
pub(crate) static ERR_BLOB_MISMATCH: &str = "stored range endpoints have different widths";

// field.rs
pub(crate) static FIELD_TYPE_ID: &str = "ipaddress";
pub(crate) static WIDGET_ID: &str = "ipaddress_default";
pub(crate) static FORMATTER_ID: &str = "ipaddress_default";
pub(crate) static WIDGET_TITLE: &str = "Ip address or range";
pub(crate) static WIDGET_DESC: &str = "Provide an IP address or range, ranges can be used as \
    \"CIDR\" (127.0.0.1/24) or separated with a dash (127.0.0.1 - 127.0.0.254)";
pub(crate) static DEFAULT_PLACEHOLDER: &str = "127.0.0.1/32";
