// Demo mode: browse a canned catalog instead of the network
//
// Answers the same FetchCommands the real fetch task handles, paging over a
// generated in-process catalog with a short simulated latency. Useful for
// showcasing the TUI and for development on a train.
//
// Run with: ARTDECK_DEMO=1 cargo run --release

use crate::api::models::Artwork;
use crate::events::{FetchCommand, GalleryEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Simulated network latency per page load
const DEMO_LATENCY: Duration = Duration::from_millis(150);

/// Famous works seeding the demo catalog; repeated with varied ids to fill
/// multiple pages
const SEED_WORKS: &[(&str, &str, &str, i32, i32)] = &[
    (
        "A Sunday on La Grande Jatte — 1884",
        "France",
        "Georges Seurat\nFrench, 1859-1891",
        1884,
        1886,
    ),
    (
        "The Bedroom",
        "Saint-Rémy-de-Provence",
        "Vincent van Gogh\nDutch, 1853-1890",
        1889,
        1889,
    ),
    (
        "American Gothic",
        "United States",
        "Grant Wood\nAmerican, 1891-1942",
        1930,
        1930,
    ),
    (
        "Nighthawks",
        "United States",
        "Edward Hopper\nAmerican, 1882-1967",
        1942,
        1942,
    ),
    (
        "The Old Guitarist",
        "Spain",
        "Pablo Picasso\nSpanish, 1881-1973",
        1903,
        1904,
    ),
    (
        "Water Lilies",
        "France",
        "Claude Monet\nFrench, 1840-1926",
        1906,
        1906,
    ),
    (
        "Paris Street; Rainy Day",
        "France",
        "Gustave Caillebotte\nFrench, 1848-1894",
        1877,
        1877,
    ),
];

/// Total records in the demo catalog (spans several pages at size 12)
const DEMO_TOTAL: u64 = 57;

/// Build the demo catalog record for one index
fn demo_artwork(index: u64) -> Artwork {
    let (title, origin, artist, start, end) = SEED_WORKS[(index as usize) % SEED_WORKS.len()];
    Artwork {
        id: 10_000 + index,
        title: Some(format!("{} (study {})", title, index + 1)),
        place_of_origin: Some(origin.to_string()),
        artist_display: Some(artist.to_string()),
        // Every third record carries an inscription, the rest are null like
        // most of the real collection
        inscriptions: if index % 3 == 0 {
            Some(format!("inscribed, plate {}", index + 1))
        } else {
            None
        },
        date_start: Some(start),
        date_end: Some(end),
    }
}

/// Serve FetchCommands from the canned catalog
pub async fn run_demo(
    mut command_rx: mpsc::Receiver<FetchCommand>,
    event_tx: mpsc::Sender<GalleryEvent>,
) {
    tracing::info!("Demo catalog ready ({} records)", DEMO_TOTAL);

    while let Some(FetchCommand { page, limit }) = command_rx.recv().await {
        sleep(DEMO_LATENCY).await;

        let start = (page.saturating_sub(1) as u64) * limit as u64;
        let end = (start + limit as u64).min(DEMO_TOTAL);
        let artworks: Vec<Artwork> = (start..end).map(demo_artwork).collect();

        let event = GalleryEvent::PageLoaded {
            page,
            artworks,
            total: DEMO_TOTAL,
            elapsed: DEMO_LATENCY,
        };

        if event_tx.send(event).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_pages_match_pagination_math() {
        let (cmd_tx, cmd_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let task = tokio::spawn(run_demo(cmd_rx, event_tx));

        cmd_tx.send(FetchCommand { page: 1, limit: 12 }).await.unwrap();
        match event_rx.recv().await.unwrap() {
            GalleryEvent::PageLoaded {
                artworks, total, ..
            } => {
                assert_eq!(artworks.len(), 12);
                assert_eq!(total, DEMO_TOTAL);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        // Last page is partial: 57 records at 12/page leaves 9 on page 5
        cmd_tx.send(FetchCommand { page: 5, limit: 12 }).await.unwrap();
        match event_rx.recv().await.unwrap() {
            GalleryEvent::PageLoaded { artworks, .. } => assert_eq!(artworks.len(), 9),
            other => panic!("unexpected event: {:?}", other),
        }

        drop(cmd_tx);
        task.await.unwrap();
    }

    #[test]
    fn demo_ids_are_unique_across_catalog() {
        let mut ids: Vec<u64> = (0..DEMO_TOTAL).map(|i| demo_artwork(i).id).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }
}
