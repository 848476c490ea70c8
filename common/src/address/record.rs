//! # Address Record
//!
//! A validated, four-octet IPv4 address as it appeared in the input.
//!
//! The original token text is kept next to the parsed octets: records print
//! exactly as they were read (`01.2.3.4` stays `01.2.3.4`), while ordering and
//! filtering only ever look at the numbers.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::address::tokenizer;
use crate::error::RecordError;

pub const OCTET_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    tokens: [String; OCTET_COUNT],
    octets: [u8; OCTET_COUNT],
}

impl Address {
    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    pub fn tokens(&self) -> &[String; OCTET_COUNT] {
        &self.tokens
    }

    pub fn to_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.octets.contains(&byte)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join("."))
    }
}

impl FromStr for Address {
    type Err = RecordError;

    /// Parses a dotted quad such as `"46.70.29.76"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(&tokenizer::split(s, '.'))
    }
}

/// Validates a token sequence into an [`Address`].
///
/// Tokens are checked in order and the first failure is returned, so
/// `["300", "x", "1", "1"]` is out of range rather than unparsable.
pub fn parse_address<S: AsRef<str>>(tokens: &[S]) -> Result<Address, RecordError> {
    let [a, b, c, d] = tokens else {
        return Err(RecordError::TokenCount {
            found: tokens.len(),
        });
    };

    let tokens = [a, b, c, d].map(|t| {
        let text: &str = t.as_ref();
        text.to_string()
    });
    let mut octets = [0u8; OCTET_COUNT];
    for (octet, token) in octets.iter_mut().zip(&tokens) {
        *octet = parse_octet(token)?;
    }

    Ok(Address { tokens, octets })
}

pub fn is_valid_address<S: AsRef<str>>(tokens: &[S]) -> bool {
    parse_address(tokens).is_ok()
}

/// Parses one octet. Only ASCII digits are accepted: no sign, no whitespace.
fn parse_octet(token: &str) -> Result<u8, RecordError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecordError::UnparsableToken {
            token: token.to_string(),
        });
    }

    // Digits only, so the only way to fail here is overflow.
    token
        .parse::<u8>()
        .map_err(|_| RecordError::OctetOutOfRange {
            token: token.to_string(),
        })
}
