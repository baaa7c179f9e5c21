// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    strings::*,
    structs::{Bound, IpFam, Notation, ParsedRange, RangeKind},
    ValidationError, ValidationErrors, IPV4_BITS, IPV6_BITS,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{net::IpAddr, str::FromStr};
use tracing::{debug, trace};

lazy_static! {
    // digits only: u8::from_str would also take a leading '+'
    static ref MASK_RE: Regex = Regex::new(r"^[0-9]{1,3}$").expect("static mask regex");
}

/// Upper bound for the CIDR prefix length.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixBound {
    /// `0..=32` for every family, also IPv6.
    #[default]
    Ipv4Width,
    /// `0..=32` for IPv4, `0..=128` for IPv6.
    FamilyWidth,
}

/// Per-field settings for what input is accepted and how the widget looks.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub allow_range: bool,
    pub allow_cidr: bool,
    /// reject explicit ranges whose start is after their end
    pub strict_order: bool,
    pub prefix_bound: PrefixBound,
    /// widget hint only, not enforced by the parser
    pub max_length: usize,
    pub placeholder: String,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            allow_range: true,
            allow_cidr: true,
            strict_order: false,
            prefix_bound: PrefixBound::default(),
            max_length: 36,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/* -------------------------------------------------------------------------- */

/**
Classifies and validates field input.

Supported formats:
- Single IP: 10.10.10.1 or 2001:db8::1
- CIDR: 10.10.10.0/28 (base kept as entered)
- Range: 10.10.10.1 - 10.10.10.10 (whitespace around the dash optional)

A dash takes priority over a slash, so `10.0.0.0/8 - 10.0.0.9` is read as
a range with an invalid start.
*/
#[derive(Clone, Debug, Default)]
pub struct RangeParser {
    settings: FieldSettings,
}

impl RangeParser {
    pub fn new(settings: FieldSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /**
    Parse raw field input.

    ### Returns
    - `Ok(None)` if the trimmed input is empty (no value).
    - `Ok(Some(range))` for valid input.
    - `Err(errors)` with every problem found. A disallowed notation is
      always reported first.
    */
    pub fn parse(&self, raw: impl AsRef<str>) -> Result<Option<ParsedRange>, ValidationErrors> {
        let value: &str = raw.as_ref().trim();
        if value.is_empty() {
            return Ok(None);
        }

        let mut errors: Vec<ValidationError> = Vec::new();

        let parsed: Option<ParsedRange> = if let Some((beg, end)) = value.split_once(DASH) {
            trace!(input = value, kind = ?RangeKind::ExplicitRange, "classified field input");
            self.parse_range(beg, end, &mut errors)
        } else if let Some((base, mask)) = value.split_once(SLASH) {
            trace!(input = value, kind = ?RangeKind::Cidr, "classified field input");
            self.parse_cidr(base, mask, &mut errors)
        } else {
            trace!(input = value, kind = ?RangeKind::Single, "classified field input");
            parse_addr(value, Bound::Start, &mut errors).map(ParsedRange::Single)
        };

        match ValidationErrors::from_vec(errors) {
            None => Ok(parsed),
            Some(errs) => {
                debug!(input = value, count = errs.len(), "rejected field input: {errs}");
                Err(errs)
            }
        }
    }

    fn parse_range(
        &self,
        beg: &str,
        end: &str,
        errors: &mut Vec<ValidationError>,
    ) -> Option<ParsedRange> {
        if !self.settings.allow_range {
            errors.push(ValidationError::NotationNotAllowed(Notation::Range));
        }

        let start: Option<IpAddr> = parse_base(beg.trim(), errors);
        let end: Option<IpAddr> = parse_addr(end.trim(), Bound::End, errors);
        let (start, end) = (start?, end?);

        if IpFam::from(start) != IpFam::from(end) {
            errors.push(ValidationError::Mismatch(start, end));
            return None;
        }
        if self.settings.strict_order && start > end {
            errors.push(ValidationError::RangeOrder(start, end));
            return None;
        }

        Some(ParsedRange::Explicit { start, end })
    }

    fn parse_cidr(
        &self,
        base: &str,
        mask: &str,
        errors: &mut Vec<ValidationError>,
    ) -> Option<ParsedRange> {
        if !self.settings.allow_cidr {
            errors.push(ValidationError::NotationNotAllowed(Notation::Cidr));
        }

        let base: Option<IpAddr> = parse_base(base.trim(), errors);

        // the mask is only worth checking when CIDR input is permitted at all
        let prefix: Option<u8> = match self.settings.allow_cidr {
            true => self.parse_mask(mask.trim(), base, errors),
            false => None,
        };

        Some(ParsedRange::Cidr {
            base: base?,
            prefix: prefix?,
        })
    }

    fn parse_mask(
        &self,
        mask: &str,
        base: Option<IpAddr>,
        errors: &mut Vec<ValidationError>,
    ) -> Option<u8> {
        let max: u8 = match (self.settings.prefix_bound, base) {
            (PrefixBound::Ipv4Width, _) => IPV4_BITS,
            (PrefixBound::FamilyWidth, Some(addr)) => IpFam::from(addr).bits(),
            // family unknown, don't pile a mask error on top of the address error
            (PrefixBound::FamilyWidth, None) => IPV6_BITS,
        };

        let prefix: Option<u8> = match MASK_RE.is_match(mask) {
            true => mask.parse::<u8>().ok(),
            false => None,
        };

        match prefix {
            Some(p) if p <= max => Some(p),
            _ => {
                errors.push(ValidationError::InvalidMask(mask.into()));
                None
            }
        }
    }
}

/// Render a range back to its canonical text, the inverse of [RangeParser::parse].
pub fn render(range: &ParsedRange) -> String {
    range.to_string()
}

impl FromStr for ParsedRange {
    type Err = ValidationErrors;

    /// Parse with default [FieldSettings]. Empty input is a [ValidationError::MissingBaseAddress].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match RangeParser::default().parse(s)? {
            Some(range) => Ok(range),
            None => Err(ValidationErrors(vec![ValidationError::MissingBaseAddress])),
        }
    }
}

/* ---------------------------------- */

/// Left-hand side of a range or CIDR: must be present and valid.
fn parse_base(s: &str, errors: &mut Vec<ValidationError>) -> Option<IpAddr> {
    if s.is_empty() {
        errors.push(ValidationError::MissingBaseAddress);
        return None;
    }
    parse_addr(s, Bound::Start, errors)
}

fn parse_addr(s: &str, bound: Bound, errors: &mut Vec<ValidationError>) -> Option<IpAddr> {
    match s.parse::<IpAddr>() {
        Ok(addr) => Some(addr),
        Err(_) => {
            errors.push(ValidationError::InvalidAddress {
                bound,
                addr: s.into(),
            });
            None
        }
    }
}

/* -------------------------------------------------------------------------- */
