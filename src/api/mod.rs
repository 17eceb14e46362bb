// Listing API module - fetches artwork pages from the Art Institute of Chicago
//
// One outbound GET per requested page. There is deliberately no retry, no
// timeout and no backoff: a failed page load is terminal for that attempt,
// the caller keeps its prior state and the user can simply page again.

pub mod models;

use crate::events::{FetchCommand, GalleryEvent};
use anyhow::{Context, Result};
use models::ArtworkPage;
use tokio::sync::mpsc;

/// HTTP client for the artworks listing endpoint
#[derive(Clone)]
pub struct ListingClient {
    client: reqwest::Client,
    api_url: String,
}

impl ListingClient {
    /// Build a client against the configured listing endpoint
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Fetch one page of artworks.
    ///
    /// Returns `None` on any transport or parse failure. Both failure modes
    /// collapse into the same outcome on purpose: the view treats `None` as
    /// "no update" and keeps whatever it was already showing.
    pub async fn fetch_page(&self, page: u32, limit: u32) -> Option<ArtworkPage> {
        let url = format!("{}?page={}&limit={}", self.api_url, page, limit);
        tracing::debug!("Fetching artworks: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!("Error fetching artworks (page {}): {}", page, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::error!(
                "Error fetching artworks (page {}): HTTP {}",
                page,
                response.status()
            );
            return None;
        }

        match response.json::<ArtworkPage>().await {
            Ok(parsed) => {
                tracing::debug!(
                    "Page {} loaded: {} rows, {} total",
                    page,
                    parsed.data.len(),
                    parsed.pagination.total
                );
                Some(parsed)
            }
            Err(e) => {
                tracing::error!("Error parsing artworks response (page {}): {}", page, e);
                None
            }
        }
    }
}

/// Background fetch task connecting the UI to the listing API.
///
/// Receives page requests from the UI, performs the fetch and reports the
/// outcome as a [`GalleryEvent`]. Requests are handled one at a time in
/// arrival order; nothing is cancelled or de-duplicated, so rapid paging can
/// deliver a slow earlier page after a faster later one (the UI applies
/// whichever arrives last).
pub async fn run_fetch_task(
    client: ListingClient,
    mut command_rx: mpsc::Receiver<FetchCommand>,
    event_tx: mpsc::Sender<GalleryEvent>,
) {
    while let Some(FetchCommand { page, limit }) = command_rx.recv().await {
        let started = std::time::Instant::now();
        let event = match client.fetch_page(page, limit).await {
            Some(loaded) => GalleryEvent::PageLoaded {
                page,
                artworks: loaded.data,
                total: loaded.pagination.total,
                elapsed: started.elapsed(),
            },
            None => GalleryEvent::FetchFailed { page },
        };

        if event_tx.send(event).await.is_err() {
            // UI is gone, shut the task down
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_failure_yields_none_without_panicking() {
        // Port 1 is never listening locally; the connection is refused fast
        let client = ListingClient::new("http://127.0.0.1:1/api/v1/artworks").unwrap();
        let result = client.fetch_page(1, 12).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn fetch_task_reports_failure_and_keeps_running() {
        let client = ListingClient::new("http://127.0.0.1:1/api/v1/artworks").unwrap();
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, mut event_rx) = mpsc::channel(8);

        let task = tokio::spawn(run_fetch_task(client, cmd_rx, event_tx));

        cmd_tx.send(FetchCommand { page: 3, limit: 12 }).await.unwrap();
        match event_rx.recv().await {
            Some(GalleryEvent::FetchFailed { page }) => assert_eq!(page, 3),
            other => panic!("expected FetchFailed, got {:?}", other),
        }

        // A second request still gets serviced after a failure
        cmd_tx.send(FetchCommand { page: 4, limit: 12 }).await.unwrap();
        assert!(matches!(
            event_rx.recv().await,
            Some(GalleryEvent::FetchFailed { page: 4 })
        ));

        drop(cmd_tx);
        task.await.unwrap();
    }
}
