//! Querying the Flickr photo search and shaping the results for display.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::photos::DisplayRecord;
use rusty_pugs_api_structs::{RawPhoto, SearchResponse};

mod http;

pub use http::{SurfFetchError, SurfFetcher};

const SEARCH_ENDPOINT: &str = "https://api.flickr.com/services/rest/";
const SEARCH_METHOD: &str = "flickr.photos.search";
const SEARCH_TEXT: &str = "pugs";

/// Something that can turn a URL into parsed JSON.
///
/// The photo functions never touch the network themselves, they hand the URL
/// they want to whatever implementation the caller passes in.
#[async_trait::async_trait]
pub trait Fetch {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn fetch(&self, url: &str) -> Result<Value, Self::Error>;
}

#[async_trait::async_trait]
impl<T> Fetch for &T
where
    T: Fetch + Sync + ?Sized,
{
    type Error = T::Error;

    async fn fetch(&self, url: &str) -> Result<Value, Self::Error> {
        (**self).fetch(url).await
    }
}

#[derive(Error, Debug)]
pub enum FetchPhotosError<E: std::error::Error + 'static> {
    #[error("photo search request failed")]
    Fetch(#[source] E),
    #[error("malformed photo search response")]
    MalformedResponse(#[from] serde_json::Error),
}

pub fn photo_obj_to_url(photo: &RawPhoto) -> String {
    format!(
        "https://farm{}.staticflickr.com/{}/{}_{}_b.jpg",
        photo.farm, photo.server, photo.id, photo.secret
    )
}

pub fn transform_photo_obj(photo: &RawPhoto) -> DisplayRecord {
    DisplayRecord {
        title: photo.title.clone(),
        url: photo_obj_to_url(photo),
    }
}

/// The search URL for pug photos. The key goes in exactly as given.
pub fn search_url(api_key: &str) -> String {
    format!(
        "{}?method={}&api_key={}&text={}&format=json&nojsoncallback=1",
        SEARCH_ENDPOINT, SEARCH_METHOD, api_key, SEARCH_TEXT
    )
}

/// Runs the search and returns the response body untouched.
pub async fn fetch_data<F: Fetch>(api_key: &str, fetcher: F) -> Result<Value, F::Error> {
    let url = search_url(api_key);
    debug!(method = SEARCH_METHOD, text = SEARCH_TEXT, "requesting photo search");
    fetcher.fetch(&url).await
}

pub async fn fetch_photos<F: Fetch>(
    api_key: &str,
    fetcher: F,
) -> Result<Vec<DisplayRecord>, FetchPhotosError<F::Error>> {
    let data = fetch_data(api_key, fetcher)
        .await
        .map_err(FetchPhotosError::Fetch)?;
    let response: SearchResponse = serde_json::from_value(data)?;

    let records: Vec<_> = response
        .photos
        .photo
        .iter()
        .map(transform_photo_obj)
        .collect();
    debug!(count = records.len(), total = %response.photos.total, "transformed photos");

    Ok(records)
}
