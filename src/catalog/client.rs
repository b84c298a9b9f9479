use std::sync::Arc;

use serde::Deserialize;

use super::{BookSummary, CatalogError};

const ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";
const LANG_RESTRICT: &str = "en";
const MAX_RESULTS: u32 = 16;

#[derive(Deserialize)]
struct VolumeList {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Deserialize)]
struct Volume {
    id: String,
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Default, Deserialize)]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
    #[serde(rename = "previewLink")]
    preview_link: Option<String>,
}

#[derive(Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

impl Volume {
    fn into_summary(self) -> BookSummary {
        let info = self.volume_info;
        BookSummary {
            id: self.id,
            title: info.title,
            authors: info.authors,
            thumbnail_url: info.image_links.and_then(|links| links.thumbnail),
            preview_url: info.preview_link,
            thumbnail: None,
        }
    }
}

/// Look up volumes matching `query`. English only, at most 16 results, per
/// the catalog page this client talks to. Cover thumbnails are fetched
/// concurrently after the volume list arrives; a volume whose cover fetch
/// fails simply renders without one.
pub async fn search(query: &str) -> Result<Vec<BookSummary>, CatalogError> {
    let client = reqwest::Client::new();
    let response = client
        .get(ENDPOINT)
        .query(&[
            ("langRestrict", LANG_RESTRICT),
            ("maxResults", &MAX_RESULTS.to_string()),
            ("q", query),
        ])
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| CatalogError::Transport(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;

    let mut books = decode(&body)?;
    fetch_thumbnails(&client, &mut books).await;
    Ok(books)
}

fn decode(body: &str) -> Result<Vec<BookSummary>, CatalogError> {
    let list: VolumeList =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;
    Ok(list.items.into_iter().map(Volume::into_summary).collect())
}

async fn fetch_thumbnails(client: &reqwest::Client, books: &mut [BookSummary]) {
    let fetches = books.iter().map(|book| {
        let url = book.thumbnail_url.clone();
        let client = client.clone();
        async move {
            let url = url?;
            let response = client.get(&url).send().await.ok()?;
            let bytes = response.bytes().await.ok()?;
            Some(Arc::new(bytes.to_vec()))
        }
    });

    let covers = futures::future::join_all(fetches).await;
    for (book, cover) in books.iter_mut().zip(covers) {
        book.thumbnail = cover;
    }
}
