//! Dotted-quad IPv4 codec.
//!
//! The interval index keys ranges by 32-bit integers in network byte order, so
//! resolved addresses have to be converted before lookup. Octet 0 is the most
//! significant byte.

use std::net::Ipv4Addr;

use crate::error_handling::AddrError;

/// Parses a dotted-quad IPv4 literal into its 32-bit big-endian value.
///
/// # Errors
///
/// Returns [`AddrError::InvalidAddress`] when the input has the wrong number of
/// segments, a non-numeric segment, or an octet outside `0..=255`.
pub fn parse_ipv4(text: &str) -> Result<u32, AddrError> {
    let addr: Ipv4Addr = text
        .parse()
        .map_err(|_| AddrError::InvalidAddress(text.to_string()))?;
    Ok(u32::from(addr))
}

/// Formats a 32-bit address value back to its dotted-quad form.
///
/// Used for diagnostics only; the located output carries coordinates, not
/// addresses.
pub fn format_ipv4(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}
