//! Tag vocabulary and helpers

/// Sentinel tag whose threshold governs untagged records and any tag
/// without an explicit threshold.
pub const TAG_DEFAULT: &str = "TAG_DEFAULT";

const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Turn a caller-identifying seed into a tag.
///
/// A seed containing a path separator is reduced to its last segment with
/// the final extension removed, so `src/db/pool.rs` becomes `pool`. Any
/// other seed is used as-is. Returns `None` when nothing usable remains.
///
/// ```
/// use rust_tagged_logger::derive_tag_from_seed;
///
/// assert_eq!(derive_tag_from_seed("src/db/pool.rs").as_deref(), Some("pool"));
/// assert_eq!(derive_tag_from_seed("db.pool").as_deref(), Some("db.pool"));
/// assert_eq!(derive_tag_from_seed(""), None);
/// ```
pub fn derive_tag_from_seed(seed: &str) -> Option<String> {
    if !seed.contains(PATH_SEPARATORS) {
        return (!seed.is_empty()).then(|| seed.to_string());
    }

    let segment = seed
        .trim_end_matches(PATH_SEPARATORS)
        .rsplit(PATH_SEPARATORS)
        .next()
        .unwrap_or_default();

    // Leading dot is part of the name (".env"), not an extension.
    let stem = match segment.rfind('.') {
        Some(idx) if idx > 0 => &segment[..idx],
        _ => segment,
    };

    (!stem.is_empty()).then(|| stem.to_string())
}

/// Ordered union of `existing` and `extra`: first occurrence wins, empty
/// strings are skipped.
pub(crate) fn merge_tags<I, S>(existing: &[String], extra: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut merged = existing.to_vec();
    for tag in extra {
        let tag = tag.into();
        if !tag.is_empty() && !merged.contains(&tag) {
            merged.push(tag);
        }
    }
    merged
}
