//! Installable string parsing.
//!
//! An installable as typed on the command line is `locator[#attrpath]`.
//! The first `#` splits the two halves; a missing `#` means an empty
//! attribute path, an empty locator half defaults to the current directory.

use crate::attrpath::AttrPath;
use crate::error::{Error, Result};
use crate::locator::FlakeLocator;

/// Split a raw installable string into its locator and attribute path.
///
/// Rules:
/// - no `#`: the whole string is the locator, the attribute path is empty
/// - empty locator half (`#foo`): defaults to [`FlakeLocator::CurrentDirectory`]
/// - a second `#` after the split is ambiguous and rejected
///
/// # Errors
///
/// Returns [`Error::MalformedReference`] for an ambiguous split, or the
/// locator / attribute path parse error for an invalid half.
///
/// # Examples
///
/// ```
/// use flakeref::{parse_installable, FlakeLocator};
///
/// let (locator, path) = parse_installable(".#packages.x86_64-linux.default").unwrap();
/// assert_eq!(locator, FlakeLocator::CurrentDirectory);
/// assert_eq!(path.segments(), ["packages", "x86_64-linux", "default"]);
///
/// let (locator, path) = parse_installable(".").unwrap();
/// assert_eq!(locator, FlakeLocator::CurrentDirectory);
/// assert!(path.is_empty());
/// ```
pub fn parse_installable(raw: &str) -> Result<(FlakeLocator, AttrPath)> {
    let (locator_half, attr_half) = match raw.split_once('#') {
        Some((locator, attr)) => (locator, Some(attr)),
        None => (raw, None),
    };

    if let Some(attr) = attr_half {
        // Attribute segments can never contain '#', so a second one makes
        // the split ambiguous.
        if attr.contains('#') {
            return Err(Error::MalformedReference {
                input: raw.to_string(),
                reason: "multiple '#' separators".to_string(),
            });
        }
    }

    let locator = if locator_half.is_empty() {
        FlakeLocator::CurrentDirectory
    } else {
        locator_half.parse()?
    };

    let path = match attr_half {
        Some(attr) => attr.parse()?,
        None => AttrPath::empty(),
    };

    Ok((locator, path))
}

/// Re-join a (locator, attribute path) pair into an installable string.
///
/// The inverse of [`parse_installable`]: re-parsing the result yields the
/// same pair. An empty attribute path omits the `#`.
///
/// # Examples
///
/// ```
/// use flakeref::{join_installable, parse_installable};
///
/// let (locator, path) = parse_installable("nixpkgs#hello").unwrap();
/// assert_eq!(join_installable(&locator, &path), "nixpkgs#hello");
/// ```
#[must_use]
pub fn join_installable(locator: &FlakeLocator, path: &AttrPath) -> String {
    if path.is_empty() {
        locator.to_string()
    } else {
        format!("{locator}#{path}")
    }
}
