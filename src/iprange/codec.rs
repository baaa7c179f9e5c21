// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{structs::IpFam, CodecError, IPV4_BYTES, IPV6_BITS, IPV6_BYTES};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/**
Encode an address to its fixed-width binary form in network byte order.

IPv4 gives 4 bytes and IPv6 gives 16 bytes. IPv4 is never padded into an
IPv4-mapped IPv6 value, so both widths sort correctly among themselves
when compared bytewise.
*/
pub fn encode(addr: IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(a) => a.octets().to_vec(),
        IpAddr::V6(a) => a.octets().to_vec(),
    }
}

/// Decode a binary address, inferring the family from its length.
pub fn decode(bytes: &[u8]) -> Result<IpAddr, CodecError> {
    if let Ok(octets) = <[u8; IPV4_BYTES]>::try_from(bytes) {
        return Ok(IpAddr::V4(Ipv4Addr::from(octets)));
    }
    if let Ok(octets) = <[u8; IPV6_BYTES]>::try_from(bytes) {
        return Ok(IpAddr::V6(Ipv6Addr::from(octets)));
    }
    Err(CodecError::InvalidLength(bytes.len()))
}

/**
Last address of the block `base/prefix`: every bit past `prefix` set to 1,
every bit within `prefix` copied from `base`.

A `prefix` wider than the address family is clamped to the family width,
which yields `base` itself.
*/
pub fn compute_cidr_end(base: IpAddr, prefix: u8) -> IpAddr {
    let fam: IpFam = IpFam::from(base);
    let host: u128 = host_mask(fam.bits(), prefix);
    int_to_ip(fam, ip_to_int(base) | host)
}

/* ---------------------------------- */

/**
Returns a u128 with the low `bits - prefix` bits set, remaining high bits zero.

bits: 32 or 128, prefix: clamped to `0..=bits`
*/
#[inline]
fn host_mask(bits: u8, prefix: u8) -> u128 {
    let host_bits: u32 = (bits - prefix.min(bits)) as u32;
    if host_bits == 0 {
        return 0;
    }
    // host_bits is 1..=128 here, so the shift stays below 128
    u128::MAX >> (IPV6_BITS as u32 - host_bits)
}

#[inline]
fn ip_to_int(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(a) => u32::from_be_bytes(a.octets()) as u128,
        IpAddr::V6(a) => u128::from_be_bytes(a.octets()),
    }
}

#[inline]
fn int_to_ip(fam: IpFam, v: u128) -> IpAddr {
    match fam {
        IpFam::V4 => IpAddr::V4(Ipv4Addr::from((v as u32).to_be_bytes())),
        IpFam::V6 => IpAddr::V6(Ipv6Addr::from(v.to_be_bytes())),
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use ipnet::IpNet;
    use quickcheck_macros::quickcheck;

    const TEST_V4: &str = "192.168.1.10";
    const TEST_V6: &str = "2001:db8::1";
    const ZERO_V4: &str = "0.0.0.0";
    const ALL_V4: &str = "255.255.255.255";
    const ALL_V6: &str = "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff";

    #[test]
    fn test_encode_v4_network_order() {
        let bytes = encode(TEST_V4.parse().unwrap());
        assert_eq!(bytes, vec![192, 168, 1, 10]);
    }

    #[test]
    fn test_encode_v6_width() {
        let bytes = encode(TEST_V6.parse().unwrap());
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..4], &[0x20, 0x01, 0x0d, 0xb8]);
        assert_eq!(bytes[15], 1);
    }

    #[test]
    fn test_encode_v4_not_mapped() {
        // no ::ffff:a.b.c.d padding
        assert_eq!(encode("10.0.0.1".parse().unwrap()).len(), 4);
    }

    #[test]
    fn test_encoded_order_matches_address_order() {
        let lo = encode("10.0.0.255".parse().unwrap());
        let hi = encode("10.0.1.0".parse().unwrap());
        assert!(lo < hi);
    }

    #[test]
    fn test_decode_invalid_length() {
        assert_eq!(decode(&[]), Err(CodecError::InvalidLength(0)));
        assert_eq!(decode(&[1, 2, 3]), Err(CodecError::InvalidLength(3)));
        assert_eq!(decode(&[0u8; 8]), Err(CodecError::InvalidLength(8)));
        assert_eq!(decode(&[0u8; 17]), Err(CodecError::InvalidLength(17)));
    }

    #[test]
    fn test_cidr_end_prefix_zero() {
        let base: IpAddr = ZERO_V4.parse().unwrap();
        assert_eq!(compute_cidr_end(base, 0), ALL_V4.parse::<IpAddr>().unwrap());
        let base: IpAddr = "::".parse().unwrap();
        assert_eq!(compute_cidr_end(base, 0), ALL_V6.parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_cidr_end_full_width() {
        let base: IpAddr = TEST_V4.parse().unwrap();
        assert_eq!(compute_cidr_end(base, 32), base);
        let base: IpAddr = TEST_V6.parse().unwrap();
        assert_eq!(compute_cidr_end(base, 128), base);
    }

    #[test]
    fn test_cidr_end_clamps_prefix() {
        let base: IpAddr = TEST_V4.parse().unwrap();
        assert_eq!(compute_cidr_end(base, 200), base);
    }

    #[test]
    fn test_cidr_end_keeps_host_bits_of_base() {
        let base: IpAddr = "10.1.2.3".parse().unwrap();
        assert_eq!(compute_cidr_end(base, 16), "10.1.255.255".parse::<IpAddr>().unwrap());
        let base: IpAddr = "2001:db8::1".parse().unwrap();
        assert_eq!(
            compute_cidr_end(base, 32),
            "2001:db8:ffff:ffff:ffff:ffff:ffff:ffff".parse::<IpAddr>().unwrap()
        );
    }

    #[quickcheck]
    fn prop_roundtrip_v4(x: u32) -> bool {
        let addr = IpAddr::V4(Ipv4Addr::from(x));
        decode(&encode(addr)) == Ok(addr)
    }

    #[quickcheck]
    fn prop_roundtrip_v6(x: u128) -> bool {
        let addr = IpAddr::V6(Ipv6Addr::from(x));
        decode(&encode(addr)) == Ok(addr)
    }

    #[quickcheck]
    fn prop_cidr_end_bits_v4(x: u32, p: u8) -> bool {
        let prefix = p % 33;
        let end = match compute_cidr_end(IpAddr::V4(Ipv4Addr::from(x)), prefix) {
            IpAddr::V4(a) => u32::from(a),
            IpAddr::V6(_) => return false,
        };
        let host: u32 = u32::MAX.checked_shr(prefix as u32).unwrap_or(0);
        end & host == host && end & !host == x & !host
    }

    #[quickcheck]
    fn prop_cidr_end_bits_v6(x: u128, p: u8) -> bool {
        let prefix = p % 129;
        let end = match compute_cidr_end(IpAddr::V6(Ipv6Addr::from(x)), prefix) {
            IpAddr::V6(a) => u128::from(a),
            IpAddr::V4(_) => return false,
        };
        let host: u128 = u128::MAX.checked_shr(prefix as u32).unwrap_or(0);
        end & host == host && end & !host == x & !host
    }

    #[quickcheck]
    fn prop_cidr_end_is_broadcast(x: u128, p: u8) -> bool {
        let addr = IpAddr::V6(Ipv6Addr::from(x));
        let prefix = p % 129;
        let net = IpNet::new(addr, prefix).unwrap();
        compute_cidr_end(addr, prefix) == net.broadcast()
    }
}
