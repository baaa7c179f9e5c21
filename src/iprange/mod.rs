// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing, validation and binary encoding of a single IP address,
//! CIDR block or explicit address range entered as free-form text.

mod codec;
mod field;
mod parser;
mod sample;
mod storage;
mod strings;
mod structs;

use std::{error, fmt, net::IpAddr};
use strings::*;

pub use codec::{compute_cidr_end, decode, encode};
pub use field::{
    Capability, Column, ColumnKind, FieldComponent, FormElement, IpAddressFieldType,
    IpAddressFormatter, IpAddressWidget,
};
pub use parser::{render, FieldSettings, PrefixBound, RangeParser};
pub use sample::sample_range;
pub use storage::StoredRange;
pub use structs::{Bound, IpFam, Notation, ParsedRange, RangeKind};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV6_BITS: u8 = 128;
pub(crate) const IPV4_BYTES: usize = 4;
pub(crate) const IPV6_BYTES: usize = 16;

/// A single problem found while validating field input.
#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// range or CIDR notation used while disabled for the field
    NotationNotAllowed(Notation),
    /// CIDR suffix is not a number or is out of bounds
    InvalidMask(String),
    InvalidAddress { bound: Bound, addr: String },
    /// the left-hand side of a range or CIDR is empty
    MissingBaseAddress,
    /// start and end are not the same IP family (v4 vs v6).
    Mismatch(IpAddr, IpAddr),
    /// only reported in strict mode
    RangeOrder(IpAddr, IpAddr),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotationNotAllowed(Notation::Range) => {
                write!(f, "{ERR_RANGE_NOT_ALLOWED}")
            }
            ValidationError::NotationNotAllowed(Notation::Cidr) => {
                write!(f, "{ERR_CIDR_NOT_ALLOWED}")
            }
            ValidationError::InvalidMask(mask) => {
                write!(f, "{ERR_INVALID_MASK}: '{mask}'")
            }
            ValidationError::InvalidAddress { bound: Bound::Start, addr } => {
                write!(f, "{ERR_INVALID_IP}: '{addr}'")
            }
            ValidationError::InvalidAddress { bound: Bound::End, addr } => {
                write!(f, "{ERR_INVALID_END}: '{addr}'")
            }
            ValidationError::MissingBaseAddress => {
                write!(f, "{ERR_NO_BASE}")
            }
            ValidationError::Mismatch(a, b) => {
                write!(f, "{ERR_MISMATCH}: {a} - {b}")
            }
            ValidationError::RangeOrder(beg, end) => {
                write!(f, "{ERR_RNG_ORDER} ({beg} > {end})")
            }
        }
    }
}

impl error::Error for ValidationError {}

/* ---------------------------------- */

/**
All problems found in one input. Never empty.

The parser keeps validating after the first failure, so that a form can
show every message attached to the field at once.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap a list of errors, `None` if there are none.
    pub(crate) fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        match errors.is_empty() {
            true => None,
            false => Some(Self(errors)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, kept for API symmetry with [Self::len].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first (highest priority) error.
    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl error::Error for ValidationErrors {}

/* ---------------------------------- */

/// Failures converting between addresses and their binary form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CodecError {
    /// byte length is neither 4 (IPv4) nor 16 (IPv6)
    InvalidLength(usize),
    FamilyMismatch { from: usize, to: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidLength(len) => {
                write!(f, "{ERR_INVALID_LEN} {len}")
            }
            CodecError::FamilyMismatch { from, to } => {
                write!(f, "{ERR_BLOB_MISMATCH} ({from} vs {to} bytes)")
            }
        }
    }
}

impl error::Error for CodecError {}

/* -------------------------------------------------------------------------- */
