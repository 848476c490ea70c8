//! # Address Records
//!
//! The pieces that turn a line like `46.70.113.73\t1\t0` into an [`record::Address`]
//! and back:
//!
//! * [`tokenizer`] splits text on a delimiter.
//! * [`record`] validates four tokens into an address.
//! * [`order`] compares addresses numerically.
//! * [`filter`] selects addresses by octet.
//! * [`pool`] collects validated addresses.

pub mod filter;
pub mod order;
pub mod pool;
pub mod record;
pub mod tokenizer;
