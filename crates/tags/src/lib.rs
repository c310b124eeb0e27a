//! Tag delta computation for check bundles.
//!
//! Circonus replaces a bundle's tags wholesale: an update PUTs the complete
//! new list. These helpers compute that list from the bundle's current tags
//! and a set of tags to add or remove, and return `None` when the operation
//! would not change anything so callers can skip the request entirely.
//!
//! `Some(vec![])` is a real result ("this bundle should end up with zero
//! tags") and is distinct from `None` ("do not issue an update at all").

use std::collections::BTreeSet;

use api_types::CheckBundle;

/// Set operation applied to a bundle's existing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOp {
    /// Add the supplied tags.
    Union,
    /// Remove the supplied tags.
    Difference,
}

/// Compute the replacement tag list after applying `op` to the bundle's
/// existing tags.
///
/// Tags compare by exact string match; duplicates and ordering in either
/// input are ignored. The returned list is sorted for determinism, but
/// callers should treat it as an unordered set. Returns `None` when the
/// resulting set equals the existing one, or when the bundle has no `tags`
/// field at all (an untagged record is never updated).
pub fn updated_tags<S: AsRef<str>>(
    op: TagOp,
    bundle: &CheckBundle,
    tags: &[S],
) -> Option<Vec<String>> {
    let existing: BTreeSet<&str> = bundle.tags.as_ref()?.iter().map(String::as_str).collect();
    let supplied: BTreeSet<&str> = tags.iter().map(AsRef::as_ref).collect();
    let result: BTreeSet<&str> = match op {
        TagOp::Union => existing.union(&supplied).copied().collect(),
        TagOp::Difference => existing.difference(&supplied).copied().collect(),
    };
    (result != existing).then(|| result.into_iter().map(str::to_owned).collect())
}

/// Tag list after adding `tags`, or `None` if every tag is already present.
pub fn tags_with<S: AsRef<str>>(bundle: &CheckBundle, tags: &[S]) -> Option<Vec<String>> {
    updated_tags(TagOp::Union, bundle, tags)
}

/// Tag list after removing `tags`, or `None` if none of them are present.
pub fn tags_without<S: AsRef<str>>(bundle: &CheckBundle, tags: &[S]) -> Option<Vec<String>> {
    updated_tags(TagOp::Difference, bundle, tags)
}
