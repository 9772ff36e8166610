// pager.rs: two-cursor pagination over search results

use crate::api::search::{PageRequest, SongPage, SongSummary};

/// Holds at most one result page. Navigation replays the page's opaque
/// prev/next link as a fresh request; each loaded page fully replaces the
/// previous one. A page with zero songs is still a loaded page, not an
/// error state.
#[derive(Debug, Default)]
pub struct Pager {
    page: Option<SongPage>,
}

impl Pager {
    pub fn new() -> Self {
        Self { page: None }
    }

    /// Replace the current page with a freshly fetched one.
    pub fn load(&mut self, page: SongPage) {
        self.page = Some(page);
    }

    pub fn page(&self) -> Option<&SongPage> {
        self.page.as_ref()
    }

    pub fn songs(&self) -> &[SongSummary] {
        self.page.as_ref().map(|p| p.data.as_slice()).unwrap_or(&[])
    }

    pub fn can_prev(&self) -> bool {
        self.page.as_ref().is_some_and(|p| p.prev.is_some())
    }

    pub fn can_next(&self) -> bool {
        self.page.as_ref().is_some_and(|p| p.next.is_some())
    }

    /// Request for the previous page, when the server offered one.
    pub fn prev_request(&self) -> Option<PageRequest> {
        self.page
            .as_ref()?
            .prev
            .as_ref()
            .map(|link| PageRequest::Link(link.clone()))
    }

    /// Request for the next page, when the server offered one.
    pub fn next_request(&self) -> Option<PageRequest> {
        self.page
            .as_ref()?
            .next
            .as_ref()
            .map(|link| PageRequest::Link(link.clone()))
    }
}
