use std::cmp::Ordering;

use crate::address::record::Address;

/// Ascending numeric order: octet 0 first, then 1, 2 and 3.
///
/// Compares parsed values, never token text, so `9.0.0.0 < 10.0.0.0`.
pub fn compare_numeric(a: &Address, b: &Address) -> Ordering {
    a.octets().cmp(&b.octets())
}

/// Numerically greater addresses first. Pass to `sort_by`.
pub fn compare_descending(a: &Address, b: &Address) -> Ordering {
    compare_numeric(b, a)
}
