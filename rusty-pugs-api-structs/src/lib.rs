use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single photo as returned by `flickr.photos.search`.
///
/// Only the fields that end up in a URL or caption are typed, and even those
/// take whatever JSON the API sent. Nothing is validated: a malformed value
/// ends up verbatim in the URLs built from it. The remaining fields are kept
/// as opaque JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawPhoto {
    #[serde(deserialize_with = "interpolated")]
    pub id: String,
    pub owner: Value,
    #[serde(deserialize_with = "interpolated")]
    pub secret: String,
    #[serde(deserialize_with = "interpolated")]
    pub server: String,
    #[serde(deserialize_with = "interpolated")]
    pub farm: String,
    #[serde(deserialize_with = "interpolated")]
    pub title: String,
    pub ispublic: Value,
    pub isfriend: Value,
    pub isfamily: Value,
}

/// The `photos` object of a search response. Only the first page is ever
/// requested, the paging counters are carried along untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhotoPage {
    #[serde(default)]
    pub page: Value,
    #[serde(default)]
    pub pages: Value,
    #[serde(default)]
    pub perpage: Value,
    #[serde(default)]
    pub total: Value,
    #[serde(deserialize_with = "photo_list")]
    pub photo: Vec<RawPhoto>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResponse {
    pub photos: PhotoPage,
}

/// Text of a JSON value as it would appear spliced into a string: strings
/// as-is, everything else (`null` included) as its JSON text.
pub fn interpolate(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn interpolated<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| interpolate(&value))
}

// The list itself must be an array; its entries are taken however they come.
fn photo_list<'de, D>(deserializer: D) -> Result<Vec<RawPhoto>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| RawPhoto::deserialize(entry).unwrap_or_default())
        .collect())
}
