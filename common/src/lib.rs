//! # ipfilter common
//!
//! Everything `ipfilter` does short of touching the terminal.
//!
//! * **[`address`]**: tokenizing, validating, ordering and filtering IPv4 address records.
//! * **[`pipeline`]**: reads candidate lines into an [`address::pool::AddressPool`] and drives a run.
//! * **[`report`]**: renders the sorted pool and its filtered views.
//! * **[`config`]** and **[`error`]**: run settings and the error types shared by the above.

pub mod address;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
