//! Group partitioning — raw catalog payload → four year buckets of
//! renderable items.
//!
//! The payload is a snapshot written by an external sync tool, so it is
//! treated as untrusted input: a missing or malformed snapshot degrades to
//! four empty buckets instead of an error the user could ever see.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Fixed number of year tabs / catalog buckets.
pub const YEAR_COUNT: usize = 4;

// ───────────────────────────────────────── types ─────────────

/// One group button's worth of render data.
///
/// `key` combines the group name with its bucket-local index, so it stays
/// stable when other buckets change and tolerates duplicate names across
/// buckets (cross-bucket uniqueness is not guaranteed upstream).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableItem {
    /// Group name, used verbatim as the navigation parameter.
    pub group: String,
    /// Stable render key: `"<group>-<index within bucket>"`.
    pub key: String,
}

impl RenderableItem {
    fn new(group: &str, index: usize) -> Self {
        Self {
            group: group.to_string(),
            key: format!("{group}-{index}"),
        }
    }
}

/// Why the snapshot could not be used as-is.  Never propagated past this
/// module — both cases fall back to empty buckets.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog key absent from cache")]
    Missing,
    #[error("catalog payload malformed: {0}")]
    Malformed(String),
}

/// Top-level shape of the cached snapshot.  Buckets stay as raw JSON values
/// here so one bad bucket cannot poison its siblings.
#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    list: Vec<Value>,
}

// ───────────────────────────────────────── algorithm ─────────

/// Split the raw payload into exactly [`YEAR_COUNT`] ordered buckets.
///
/// Per-bucket order and cardinality are preserved; nothing is deduplicated
/// or sorted.  A bucket that is not an array of strings becomes empty, as
/// does every bucket when the whole payload is absent or unparseable.
/// Input buckets beyond [`YEAR_COUNT`] are ignored.
pub fn partition(raw: Option<&str>) -> [Vec<RenderableItem>; YEAR_COUNT] {
    let buckets = match parse_catalog(raw) {
        Ok(list) => list,
        Err(err) => {
            tracing::debug!("falling back to empty catalog: {err}");
            return Default::default();
        }
    };

    let mut out: [Vec<RenderableItem>; YEAR_COUNT] = Default::default();
    for (i, bucket) in buckets.iter().take(YEAR_COUNT).enumerate() {
        out[i] = coerce_bucket(bucket)
            .into_iter()
            .enumerate()
            .map(|(index, group)| RenderableItem::new(group, index))
            .collect();
    }
    out
}

/// Parse the payload into its bucket list, or say why it cannot be used.
fn parse_catalog(raw: Option<&str>) -> Result<Vec<Value>, CatalogError> {
    let text = raw.ok_or(CatalogError::Missing)?;
    let catalog: RawCatalog =
        serde_json::from_str(text).map_err(|e| CatalogError::Malformed(e.to_string()))?;
    Ok(catalog.list)
}

/// A bucket is usable only if it is an array of strings; anything else
/// (a number, an object, a mixed array) reads as empty.
fn coerce_bucket(bucket: &Value) -> Vec<&str> {
    let Some(entries) = bucket.as_array() else {
        return Vec::new();
    };
    let mut names = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.as_str() {
            Some(name) => names.push(name),
            None => return Vec::new(),
        }
    }
    names
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn names(bucket: &[RenderableItem]) -> Vec<&str> {
        bucket.iter().map(|item| item.group.as_str()).collect()
    }

    #[test]
    fn preserves_per_bucket_order_and_cardinality() {
        let raw = r#"{"list":[["G1"],["G2A","G2B"],[],["G4"]]}"#;
        let out = partition(Some(raw));

        assert_eq!(names(&out[0]), ["G1"]);
        assert_eq!(names(&out[1]), ["G2A", "G2B"]);
        assert!(out[2].is_empty());
        assert_eq!(names(&out[3]), ["G4"]);
    }

    #[test]
    fn keys_use_bucket_local_index() {
        let raw = r#"{"list":[[],["G2A","G2B"],[],[]]}"#;
        let out = partition(Some(raw));

        assert_eq!(out[1][0].key, "G2A-0");
        assert_eq!(out[1][1].key, "G2B-1");
    }

    #[test]
    fn duplicate_names_are_kept_verbatim() {
        let raw = r#"{"list":[["A","A","A"],[],[],[]]}"#;
        let out = partition(Some(raw));

        assert_eq!(names(&out[0]), ["A", "A", "A"]);
        assert_eq!(out[0][2].key, "A-2");
    }

    #[test]
    fn absent_payload_yields_empty_buckets() {
        let out = partition(None);
        assert!(out.iter().all(|b| b.is_empty()));
    }

    #[test]
    fn unparseable_payload_yields_empty_buckets() {
        for raw in ["0", "not json", "{", r#"{"list":"nope"}"#] {
            let out = partition(Some(raw));
            assert!(out.iter().all(|b| b.is_empty()), "payload {raw:?}");
        }
    }

    #[test]
    fn invalid_bucket_empties_only_itself() {
        let raw = r#"{"list":[["G1"],42,["G3",7],["G4"]]}"#;
        let out = partition(Some(raw));

        assert_eq!(names(&out[0]), ["G1"]);
        assert!(out[1].is_empty(), "non-array bucket");
        assert!(out[2].is_empty(), "mixed-type bucket");
        assert_eq!(names(&out[3]), ["G4"]);
    }

    #[test]
    fn short_and_long_lists_clamp_to_year_count() {
        let short = partition(Some(r#"{"list":[["G1"]]}"#));
        assert_eq!(names(&short[0]), ["G1"]);
        assert!(short[1..].iter().all(|b| b.is_empty()));

        let long = partition(Some(r#"{"list":[[],[],[],[],["extra"]]}"#));
        assert!(long.iter().all(|b| b.is_empty()));
    }
}
