// Cross-page selection tracking
//
// The table widget only ever reports "the rows currently checked among the
// rows it currently renders". To let a selection survive pagination, every
// selection-change event is reconciled against the full set here: entries
// belonging to the visible page window are replaced wholesale by the widget's
// report, entries from other pages are kept untouched.

use crate::api::models::Artwork;
use std::collections::HashSet;

/// Insertion-ordered set of selected artworks, unique by id.
///
/// Independent of which page is currently loaded. The id-keyed partition in
/// [`reconcile`](Self::reconcile) is the invariant that makes selections
/// survive page navigation.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: Vec<Artwork>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a selection-change event from the table.
    ///
    /// `page_window` is the set of rows the table currently renders and
    /// `checked` the rows checked within it. Existing entries whose id falls
    /// inside the window are discarded (the widget's report is authoritative
    /// for visible rows), entries from other pages are kept, then the checked
    /// rows are appended. Unchecking a previously selected row on a revisited
    /// page therefore drops it; rows never shown again stay selected.
    pub fn reconcile(&mut self, page_window: &[Artwork], checked: &[Artwork]) {
        let window_ids: HashSet<u64> = page_window.iter().map(|a| a.id).collect();

        self.entries.retain(|a| !window_ids.contains(&a.id));

        for art in checked {
            // The widget should only report rows from its own window, but a
            // duplicate id must never slip in regardless.
            if window_ids.contains(&art.id) && !self.contains(art.id) {
                self.entries.push(art.clone());
            }
        }
    }

    /// Remove one entry by id. No-op if absent.
    pub fn remove(&mut self, id: u64) {
        self.entries.retain(|a| a.id != id);
    }

    /// Intersection with the current page window, as ids.
    ///
    /// Feeds the checkbox column so a revisited page shows its prior checks.
    pub fn page_selection(&self, page_window: &[Artwork]) -> HashSet<u64> {
        page_window
            .iter()
            .map(|a| a.id)
            .filter(|id| self.contains(*id))
            .collect()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected artworks in insertion order (for the side panel)
    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(id: u64) -> Artwork {
        Artwork {
            id,
            title: Some(format!("Artwork {}", id)),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    fn page(ids: &[u64]) -> Vec<Artwork> {
        ids.iter().map(|&id| art(id)).collect()
    }

    #[test]
    fn selection_survives_page_navigation() {
        let mut sel = SelectionSet::new();
        let page1 = page(&[1, 2, 3]);
        let page2 = page(&[4, 5, 6]);

        // Check artwork 2 on page 1
        sel.reconcile(&page1, &[art(2)]);
        assert!(sel.contains(2));

        // Load page 2, touch nothing there
        sel.reconcile(&page2, &[]);
        assert!(sel.contains(2));

        // Back on page 1 the intersection re-checks it
        let checked = sel.page_selection(&page1);
        assert!(checked.contains(&2));
        assert_eq!(checked.len(), 1);
    }

    #[test]
    fn uncheck_on_revisited_page_drops_entry() {
        let mut sel = SelectionSet::new();
        let page1 = page(&[1, 2, 3]);
        let page2 = page(&[4, 5, 6]);

        sel.reconcile(&page1, &[art(1), art(3)]);
        sel.reconcile(&page2, &[art(5)]);
        assert_eq!(sel.len(), 3);

        // Revisit page 1 and uncheck artwork 3 (only 1 still reported)
        sel.reconcile(&page1, &[art(1)]);
        assert!(sel.contains(1));
        assert!(!sel.contains(3));
        assert!(sel.contains(5));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn no_duplicate_ids_across_arbitrary_sequences() {
        let mut sel = SelectionSet::new();
        let page1 = page(&[1, 2, 3]);
        let page2 = page(&[3, 4, 5]); // id 3 appears on both pages

        sel.reconcile(&page1, &[art(2), art(3)]);
        sel.reconcile(&page2, &[art(3), art(4)]);
        sel.reconcile(&page1, &[art(2), art(3)]);
        sel.reconcile(&page2, &[art(3), art(4), art(5)]);

        let mut ids: Vec<u64> = sel.iter().map(|a| a.id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate ids in selection");
    }

    #[test]
    fn checked_rows_outside_window_are_ignored() {
        let mut sel = SelectionSet::new();
        let page1 = page(&[1, 2, 3]);

        // A row from another page must not enter via this window's report
        sel.reconcile(&page1, &[art(1), art(99)]);
        assert!(sel.contains(1));
        assert!(!sel.contains(99));
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut sel = SelectionSet::new();
        sel.reconcile(&page(&[1, 2]), &[art(1)]);

        sel.remove(42);
        assert_eq!(sel.len(), 1);
        assert!(sel.contains(1));

        sel.remove(1);
        assert!(sel.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved_for_side_panel() {
        let mut sel = SelectionSet::new();
        let page1 = page(&[1, 2, 3]);
        let page2 = page(&[4, 5, 6]);

        sel.reconcile(&page1, &[art(3), art(1)]);
        sel.reconcile(&page2, &[art(5)]);

        let ids: Vec<u64> = sel.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1, 5]);
    }

    #[test]
    fn reconcile_with_empty_window_keeps_everything() {
        let mut sel = SelectionSet::new();
        sel.reconcile(&page(&[1, 2]), &[art(1), art(2)]);

        // Failed fetch leaves an empty window; reconciling against it must
        // not discard out-of-page entries
        sel.reconcile(&[], &[]);
        assert_eq!(sel.len(), 2);
    }
}
