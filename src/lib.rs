// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Validation and storage encoding for an "IP address or range" input field.

A single text field accepts one address, a CIDR block or an explicit range:
```ignore
use ipfield::{RangeParser, StoredRange};

let range = RangeParser::default().parse("192.168.1.10 - 192.168.1.20")?.unwrap();
let item = StoredRange::from(&range);
assert_eq!(item.ip_from, vec![192, 168, 1, 10]);
assert_eq!(item.raw_ip(), "192.168.1.10 - 192.168.1.20");
```
*/

pub mod iprange;

pub use iprange::{
    compute_cidr_end, decode, encode, render, sample_range, Bound, Capability, CodecError,
    Column, ColumnKind, FieldComponent, FieldSettings, FormElement, IpAddressFieldType,
    IpAddressFormatter, IpAddressWidget, IpFam, Notation, ParsedRange, PrefixBound, RangeKind,
    RangeParser, StoredRange, ValidationError, ValidationErrors,
};
