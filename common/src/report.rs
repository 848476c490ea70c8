//! Plain-text rendering of the sorted pool and its filtered views.
//!
//! Output is meant for stdout and other programs: one dotted quad per line,
//! no colors, no decoration besides the `filter(...)` headers.

use std::io::{self, Write};

use crate::address::filter;
use crate::address::record::Address;

/// One filtered view, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub records: Vec<Address>,
}

/// The three fixed views printed after the full pool.
pub fn filtered_sections(pool: &[Address]) -> Vec<Section> {
    vec![
        Section {
            header: "filter(1)".to_string(),
            records: filter::filter_by_prefix1(pool, 1),
        },
        Section {
            header: "filter(46, 70)".to_string(),
            records: filter::filter_by_prefix2(pool, 46, 70),
        },
        Section {
            header: "filter_any(46)".to_string(),
            records: filter::filter_any(pool, 46),
        },
    ]
}

pub fn write_pool<W: Write>(writer: &mut W, records: &[Address]) -> io::Result<()> {
    for address in records {
        writeln!(writer, "{address}")?;
    }
    Ok(())
}

/// Writes the full pool, then each filtered section behind a blank line and its header.
pub fn write_report<W: Write>(writer: &mut W, pool: &[Address]) -> io::Result<()> {
    write_pool(writer, pool)?;
    for section in filtered_sections(pool) {
        writeln!(writer)?;
        writeln!(writer, "{}", section.header)?;
        write_pool(writer, &section.records)?;
    }
    Ok(())
}
