//! Correlation-id wire parsing.
//!
//! The injector piggybacks the id on the `aria-keyshortcuts` attribute, so
//! it surfaces in the snapshot as the `keyshortcuts` property. Some hosts
//! concatenate multiple stamped values into one space-delimited run of
//! digits; the last token is the id of the node's own element. All parsing
//! of that side channel lives here.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_DELIMITED_MMID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d ]+$").expect("static pattern"));

/// Whether a value is a run of digits and spaces.
pub fn is_space_delimited_mmid(value: &str) -> bool {
    SPACE_DELIMITED_MMID.is_match(value)
}

/// Parse a correlation id from the `keyshortcuts` snapshot property.
///
/// Returns `None` for anything that is not a digit/space run or whose last
/// token does not fit a positive integer.
pub fn parse_correlation_id(value: &str) -> Option<u32> {
    if !is_space_delimited_mmid(value) {
        return None;
    }
    let last = value.split(' ').next_back()?;
    last.parse::<u32>().ok()
}

#[cfg(test)]
#[path = "mmid_tests.rs"]
mod tests;
