// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    codec::{decode, encode},
    strings::*,
    structs::ParsedRange,
    CodecError,
};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/**
Storage form of one field value.

The textual columns (`ip`, `ip_cidr`, `ip_end`) reproduce what the user
entered, the binary columns (`ip_from`, `ip_to`) are the fixed-width
endpoints used for ordering and containment queries. For a single address
`ip_to` equals `ip_from`.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StoredRange {
    /// base address, also the start of the range
    pub ip: String,
    pub ip_cidr: Option<u8>,
    /// set for CIDR blocks (computed) and explicit ranges
    pub ip_end: Option<String>,
    pub ip_from: Vec<u8>,
    pub ip_to: Vec<u8>,
}

impl StoredRange {
    /**
    Rebuild the input text from the textual columns:
    `base`, `base/cidr` or `base - end`.

    The CIDR column wins over the end column, since both are set for a
    CIDR block.
    */
    pub fn raw_ip(&self) -> String {
        let mut raw: String = self.ip.clone();
        if let Some(cidr) = self.ip_cidr {
            raw.push(SLASH);
            raw.push_str(&cidr.to_string());
        } else if let Some(end) = self.ip_end.as_deref().filter(|e| !e.is_empty()) {
            raw.push_str(RANGE_SEP);
            raw.push_str(end);
        }
        raw
    }

    /**
    Reconstruct the parsed value from the binary endpoints, which are the
    durable part of the record.

    ### Errors
    - [CodecError::InvalidLength] if either endpoint is not 4 or 16 bytes.
    - [CodecError::FamilyMismatch] if the endpoints differ in width.
    */
    pub fn to_parsed(&self) -> Result<ParsedRange, CodecError> {
        let start: IpAddr = decode(&self.ip_from)?;

        if let Some(prefix) = self.ip_cidr {
            return Ok(ParsedRange::Cidr {
                base: start,
                prefix,
            });
        }

        match self.ip_end.as_deref() {
            Some(end) if !end.is_empty() => {
                let end: IpAddr = decode(&self.ip_to)?;
                if self.ip_from.len() != self.ip_to.len() {
                    return Err(CodecError::FamilyMismatch {
                        from: self.ip_from.len(),
                        to: self.ip_to.len(),
                    });
                }
                Ok(ParsedRange::Explicit { start, end })
            }
            _ => Ok(ParsedRange::Single(start)),
        }
    }

    /**
    Storage-level containment check: `ip_from <= addr <= ip_to`, comparing
    the encoded bytes. Addresses of the other family never match, since
    the two widths are stored distinctly.
    */
    pub fn contains(&self, addr: IpAddr) -> bool {
        let needle: Vec<u8> = encode(addr);
        if needle.len() != self.ip_from.len() || needle.len() != self.ip_to.len() {
            return false;
        }
        self.ip_from <= needle && needle <= self.ip_to
    }
}

impl From<&ParsedRange> for StoredRange {
    fn from(range: &ParsedRange) -> Self {
        Self {
            ip: range.start().to_string(),
            ip_cidr: range.cidr_prefix(),
            ip_end: range.end().map(|end| end.to_string()),
            ip_from: encode(range.start()),
            ip_to: encode(range.effective_end()),
        }
    }
}

impl From<ParsedRange> for StoredRange {
    fn from(range: ParsedRange) -> Self {
        StoredRange::from(&range)
    }
}

/* -------------------------------------------------------------------------- */
