//! Octet filters over a slice of addresses.
//!
//! Each returns a fresh vector, keeping the relative order of the input.

use crate::address::record::Address;

fn select<F>(pool: &[Address], predicate: F) -> Vec<Address>
where
    F: Fn(&Address) -> bool,
{
    pool.iter().filter(|addr| predicate(*addr)).cloned().collect()
}

/// Addresses whose first octet is `byte0`.
pub fn filter_by_prefix1(pool: &[Address], byte0: u8) -> Vec<Address> {
    select(pool, |addr| addr.octets()[0] == byte0)
}

/// Addresses whose first two octets are `byte0.byte1`.
pub fn filter_by_prefix2(pool: &[Address], byte0: u8, byte1: u8) -> Vec<Address> {
    select(pool, |addr| {
        let octets = addr.octets();
        octets[0] == byte0 && octets[1] == byte1
    })
}

/// Addresses with `byte` in any position.
pub fn filter_any(pool: &[Address], byte: u8) -> Vec<Address> {
    select(pool, |addr| addr.contains(byte))
}
