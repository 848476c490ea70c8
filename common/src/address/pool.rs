//! # Address Pool
//!
//! The in-memory collection of every valid address read so far.
//!
//! Records are only ever appended (while parsing) or reordered (by
//! [`AddressPool::sort_descending`]); filtered views are built as new
//! vectors by [`crate::address::filter`].

use crate::address::order;
use crate::address::record::{self, Address};
use crate::address::tokenizer;
use crate::config::TokenPolicy;
use crate::error::RecordError;

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted,
    Skipped(RecordError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPool {
    records: Vec<Address>,
}

impl AddressPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, address: Address) {
        self.records.push(address);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.records
    }

    /// Stable sort, numerically greatest address first.
    pub fn sort_descending(&mut self) {
        self.records.sort_by(order::compare_descending);
    }

    /// Parses one `<ip>[\t<ignored>...]` line and appends it when valid.
    ///
    /// Malformed lines are reported as [`LineOutcome::Skipped`]. An unparsable
    /// token is only returned as `Err` under [`TokenPolicy::Abort`].
    pub fn ingest_line(
        &mut self,
        line: &str,
        policy: TokenPolicy,
    ) -> Result<LineOutcome, RecordError> {
        let field = tokenizer::first_field(line);
        match record::parse_address(&tokenizer::split(field, '.')) {
            Ok(address) => {
                self.push(address);
                Ok(LineOutcome::Accepted)
            }
            Err(e) if e.is_fatal() && policy == TokenPolicy::Abort => Err(e),
            Err(e) => Ok(LineOutcome::Skipped(e)),
        }
    }
}

impl FromIterator<Address> for AddressPool {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
