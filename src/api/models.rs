// Data models for parsing the Art Institute of Chicago listing API
//
// These structs map to the artworks search endpoint's JSON format.
// We use Serde's derive macros to automatically generate
// deserialization code.
//
// Note: We only parse the fields we care about for display.
// Serde will ignore extra fields, making this robust to API changes.

use serde::{Deserialize, Serialize};

/// A single artwork record from the listing API
///
/// Every display field other than `id` is nullable upstream - the collection
/// contains records with missing origins, artists and dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Title for display, falling back to the record id
    pub fn display_title(&self) -> String {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => format!("Untitled #{}", self.id),
        }
    }

    /// Compact "start–end" year range, empty when both dates are unknown
    pub fn year_range(&self) -> String {
        match (self.date_start, self.date_end) {
            (Some(a), Some(b)) if a == b => format!("{}", a),
            (Some(a), Some(b)) => format!("{}–{}", a, b),
            (Some(a), None) => format!("{}–", a),
            (None, Some(b)) => format!("–{}", b),
            (None, None) => String::new(),
        }
    }
}

/// Pagination block accompanying every listing response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// One page of artworks plus the pagination envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

impl ArtworkPage {
    /// Number of pages implied by the total count and a page size
    pub fn page_count(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.pagination.total.div_ceil(page_size as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed from a real response of /api/v1/artworks?page=1&limit=2
    const SAMPLE: &str = r#"{
        "pagination": {"total": 140, "limit": 2, "current_page": 1, "total_pages": 70},
        "data": [
            {
                "id": 27992,
                "title": "A Sunday on La Grande Jatte — 1884",
                "place_of_origin": "France",
                "artist_display": "Georges Seurat\nFrench, 1859-1891",
                "inscriptions": null,
                "date_start": 1884,
                "date_end": 1886,
                "api_model": "artworks",
                "is_boosted": true
            },
            {
                "id": 28560,
                "title": null,
                "place_of_origin": null,
                "artist_display": null,
                "inscriptions": "signed lower right",
                "date_start": null,
                "date_end": null
            }
        ]
    }"#;

    #[test]
    fn parses_listing_response_ignoring_unknown_fields() {
        let page: ArtworkPage = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.total, 140);

        let first = &page.data[0];
        assert_eq!(first.id, 27992);
        assert_eq!(first.place_of_origin.as_deref(), Some("France"));
        assert_eq!(first.date_start, Some(1884));
        assert!(first.inscriptions.is_none());
    }

    #[test]
    fn nullable_fields_deserialize_to_none() {
        let page: ArtworkPage = serde_json::from_str(SAMPLE).unwrap();
        let sparse = &page.data[1];
        assert!(sparse.title.is_none());
        assert!(sparse.artist_display.is_none());
        assert_eq!(sparse.inscriptions.as_deref(), Some("signed lower right"));
        assert_eq!(sparse.display_title(), "Untitled #28560");
    }

    #[test]
    fn page_count_from_total() {
        let page: ArtworkPage = serde_json::from_str(SAMPLE).unwrap();
        // 140 records at 12 per page -> 12 pages (last one partial)
        assert_eq!(page.page_count(12), 12);
        assert_eq!(page.page_count(70), 2);
        assert_eq!(page.page_count(0), 0);
    }

    #[test]
    fn year_range_formats() {
        let mut art: Artwork = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(art.year_range(), "");

        art.date_start = Some(1884);
        art.date_end = Some(1886);
        assert_eq!(art.year_range(), "1884–1886");

        art.date_end = Some(1884);
        assert_eq!(art.year_range(), "1884");
    }
}
