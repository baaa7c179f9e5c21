// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{codec::compute_cidr_end, strings::*, IPV4_BITS, IPV4_BYTES, IPV6_BITS, IPV6_BYTES};
use ipnet::IpNet;
use std::{fmt, net::IpAddr};

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IpFam {
    V4,
    V6,
}

impl IpFam {
    /// Address width in bits.
    pub fn bits(&self) -> u8 {
        match self {
            IpFam::V4 => IPV4_BITS,
            IpFam::V6 => IPV6_BITS,
        }
    }

    /// Width of the binary (storage) form in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            IpFam::V4 => IPV4_BYTES,
            IpFam::V6 => IPV6_BYTES,
        }
    }
}

impl From<IpAddr> for IpFam {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => IpFam::V4,
            IpAddr::V6(_) => IpFam::V6,
        }
    }
}

/// Non-single notations a field can allow or refuse.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Notation {
    /// `start - end`
    Range,
    /// `addr/prefix`
    Cidr,
}

/// Which side of a range a value belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Bound {
    Start,
    End,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RangeKind {
    Single,
    Cidr,
    ExplicitRange,
}

/* -------------------------------------------------------------------------- */

/**
A validated field value: one address, a CIDR block, or an explicit range.

The kind decides which of `end` and `cidr_prefix` exist, so the variants
carry exactly the data that kind needs. For a CIDR block the end is
derived from the base and prefix on demand.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParsedRange {
    Single(IpAddr),
    /// `base` is kept as entered, host bits are not cleared.
    Cidr { base: IpAddr, prefix: u8 },
    /// Inclusive. Both ends are the same family; order is not guaranteed
    /// unless the parser ran in strict mode.
    Explicit { start: IpAddr, end: IpAddr },
}

impl ParsedRange {
    pub fn kind(&self) -> RangeKind {
        match self {
            ParsedRange::Single(_) => RangeKind::Single,
            ParsedRange::Cidr { .. } => RangeKind::Cidr,
            ParsedRange::Explicit { .. } => RangeKind::ExplicitRange,
        }
    }

    /// The base address, also the start of the range.
    pub fn start(&self) -> IpAddr {
        match *self {
            ParsedRange::Single(addr) => addr,
            ParsedRange::Cidr { base, .. } => base,
            ParsedRange::Explicit { start, .. } => start,
        }
    }

    /// End of the range. `None` for a single address.
    pub fn end(&self) -> Option<IpAddr> {
        match *self {
            ParsedRange::Single(_) => None,
            ParsedRange::Cidr { base, prefix } => Some(compute_cidr_end(base, prefix)),
            ParsedRange::Explicit { end, .. } => Some(end),
        }
    }

    /// End of the range, or the start for a single address.
    pub fn effective_end(&self) -> IpAddr {
        self.end().unwrap_or_else(|| self.start())
    }

    pub fn cidr_prefix(&self) -> Option<u8> {
        match *self {
            ParsedRange::Cidr { prefix, .. } => Some(prefix),
            _ => None,
        }
    }

    pub fn family(&self) -> IpFam {
        IpFam::from(self.start())
    }

    /// The normalized network of a CIDR block (host bits cleared).
    pub fn network(&self) -> Option<IpNet> {
        match *self {
            ParsedRange::Cidr { base, prefix } => IpNet::new(base, prefix).ok().map(|n| n.trunc()),
            _ => None,
        }
    }

    /**
    Whether `addr` lies within `start..=effective_end`.

    A lenient explicit range with start > end contains nothing, matching
    what a storage-level `ip_from <= x AND x <= ip_to` query returns.
    */
    pub fn contains(&self, addr: IpAddr) -> bool {
        if IpFam::from(addr) != self.family() {
            return false;
        }
        self.start() <= addr && addr <= self.effective_end()
    }
}

impl fmt::Display for ParsedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedRange::Single(addr) => write!(f, "{addr}"),
            ParsedRange::Cidr { base, prefix } => write!(f, "{base}{SLASH}{prefix}"),
            ParsedRange::Explicit { start, end } => write!(f, "{start}{RANGE_SEP}{end}"),
        }
    }
}

/* -------------------------------------------------------------------------- */
