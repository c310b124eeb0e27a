//! Parsing helpers for Circonus CID references.
//!
//! A CID is a resource reference of the form `[/]resource_type/id[/]`, e.g.
//! `/check_bundle/70681`. One surrounding slash on either side is optional
//! and carries no meaning, so `check/123`, `/check/123`, `check/123/` and
//! `/check/123/` all refer to the same resource.

use thiserror::Error;

/// Error raised when a CID reference cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidError {
    /// The reference has no resource-type segment.
    #[error("CID `{0}` has no resource segment")]
    NoResource(String),
    /// The trailing segment is not a base-10 integer.
    #[error("CID `{0}` does not end in a numeric id")]
    NonNumericId(String),
}

/// Strip at most one leading and one trailing `/`.
fn trim_slashes(cid: &str) -> &str {
    let cid = cid.strip_prefix('/').unwrap_or(cid);
    cid.strip_suffix('/').unwrap_or(cid)
}

/// Extract the resource type from a CID, e.g. `"check"` from `/check/123456`.
pub fn resource_type(cid: &str) -> Result<&str, CidError> {
    let first = trim_slashes(cid).split('/').next().unwrap_or("");
    if first.is_empty() {
        return Err(CidError::NoResource(cid.to_owned()));
    }
    Ok(first)
}

/// Extract the numeric id from a CID, e.g. `70681` from `/check_bundle/70681`.
pub fn check_id(cid: &str) -> Result<u64, CidError> {
    let last = trim_slashes(cid).rsplit('/').next().unwrap_or("");
    last.parse().map_err(|_| CidError::NonNumericId(cid.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_ignores_surrounding_slashes() {
        for cid in ["check/123456", "/check/123456", "check/123456/", "/check/123456/"] {
            assert_eq!(resource_type(cid), Ok("check"));
        }
    }

    #[test]
    fn test_resource_type_without_id_segment() {
        assert_eq!(resource_type("check"), Ok("check"));
        assert_eq!(resource_type("/check"), Ok("check"));
    }

    #[test]
    fn test_resource_type_rejects_empty_references() {
        for cid in ["", "/", "//"] {
            assert_eq!(resource_type(cid), Err(CidError::NoResource(cid.to_owned())));
        }
    }

    #[test]
    fn test_check_id_ignores_surrounding_slashes() {
        for cid in [
            "check_bundle/123456",
            "/check_bundle/123456",
            "check_bundle/123456/",
            "/check_bundle/123456/",
        ] {
            assert_eq!(check_id(cid), Ok(123456));
        }
    }

    #[test]
    fn test_check_id_rejects_non_numeric_id() {
        for cid in ["check_bundle/abc", "check_bundle", "/check_bundle/12.5/", ""] {
            assert_eq!(check_id(cid), Err(CidError::NonNumericId(cid.to_owned())));
        }
    }
}
