// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{structs::ParsedRange, IPV4_BITS};
use rand::Rng;
use std::net::{IpAddr, Ipv4Addr};

/**
Generate a random IPv4 field value: a single address, a CIDR block or an
explicit range, each equally likely.

The generator is supplied by the caller, so a seeded RNG gives a
reproducible sequence. Explicit ranges are always ordered.
*/
pub fn sample_range<R: Rng + ?Sized>(rng: &mut R) -> ParsedRange {
    let base: IpAddr = random_v4(rng);
    match rng.random_range(0..3u8) {
        0 => ParsedRange::Cidr {
            base,
            prefix: rng.random_range(0..=IPV4_BITS),
        },
        1 => {
            let other: IpAddr = random_v4(rng);
            let (start, end) = match base <= other {
                true => (base, other),
                false => (other, base),
            };
            ParsedRange::Explicit { start, end }
        }
        _ => ParsedRange::Single(base),
    }
}

#[inline]
fn random_v4<R: Rng + ?Sized>(rng: &mut R) -> IpAddr {
    IpAddr::V4(Ipv4Addr::from(rng.random::<u32>()))
}

/* -------------------------------------------------------------------------- */
