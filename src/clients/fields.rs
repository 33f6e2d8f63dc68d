//! Optional response field encoding.
//!
//! Some resources (characters, guilds) return extra sections only when asked
//! for them in a `fields` query parameter.

use serde_json::{Map, Value};

/// Query key carrying the requested optional fields.
pub const FIELDS_PARAM: &str = "fields";

/// Encodes a list of optional field names into request parameters.
///
/// An empty list yields an empty map, so no `fields` key is sent at all.
/// Otherwise the names are joined with commas, in the order given.
///
/// # Example
///
/// ```rust
/// use battlenet_api::encode_fields;
///
/// let params = encode_fields(["items", "stats"]);
/// assert_eq!(params["fields"], "items,stats");
///
/// let empty: [&str; 0] = [];
/// assert!(encode_fields(empty).is_empty());
/// ```
pub fn encode_fields<I, S>(fields: I) -> Map<String, Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = fields
        .into_iter()
        .map(|field| field.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",");

    let mut params = Map::new();
    if !joined.is_empty() {
        params.insert(FIELDS_PARAM.to_string(), Value::String(joined));
    }
    params
}
