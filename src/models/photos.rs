use serde::{Deserialize, Serialize};

/// What the gallery actually shows of a photo: a caption and where to load
/// the image from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct DisplayRecord {
    pub title: String,
    pub url: String,
}

impl DisplayRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        DisplayRecord {
            title: title.into(),
            url: url.into(),
        }
    }
}
