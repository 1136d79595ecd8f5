use crate::shared::disclosure::{
    AnchorId, DisclosureError, DisclosureList, EntryStates, OverlayCoordinator,
};
use contracts::usecases::common_use_cases::{UseCaseId, UseCaseItem};
use std::collections::HashSet;

/// State of one `CommonUseCasesView` instance
#[derive(Debug, Clone, PartialEq)]
pub struct CommonUseCasesState {
    list: DisclosureList,
    entries: EntryStates,
    overlay: OverlayCoordinator,
}

impl CommonUseCasesState {
    pub fn new(items: Vec<UseCaseItem>, page_size: usize) -> Result<Self, DisclosureError> {
        let mut state = Self {
            list: DisclosureList::initialize(items, page_size)?,
            entries: EntryStates::new(),
            overlay: OverlayCoordinator::new(),
        };
        state.track_visible();
        Ok(state)
    }

    /// Replace the items with a new collection.
    ///
    /// The window starts over at one page, every entry collapses and entries for
    /// ids that are gone are dropped. Any open overlay closes.
    pub fn set_items(&mut self, items: Vec<UseCaseItem>) {
        let page_size = self.list.page_size();
        log::debug!("common use cases: reinitialized with {} items", items.len());

        let ids: HashSet<UseCaseId> = items.iter().map(|i| i.id.clone()).collect();
        self.list = match DisclosureList::initialize(items, page_size) {
            Ok(list) => list,
            // page_size was validated when this state was created
            Err(e) => {
                log::error!("common use cases: {}", e);
                return;
            }
        };
        self.entries.collapse_all();
        self.entries.retain(|id| ids.contains(id));
        self.overlay.reset();
        self.track_visible();
    }

    pub fn visible_items(&self) -> &[UseCaseItem] {
        self.list.visible_items()
    }

    pub fn has_more(&self) -> bool {
        self.list.has_more()
    }

    pub fn show_more(&mut self) {
        self.list.show_more();
        self.track_visible();
    }

    pub fn toggle(&mut self, id: &UseCaseId) {
        self.entries.toggle(id);
    }

    pub fn is_expanded(&self, id: &UseCaseId) -> bool {
        self.entries.is_expanded(id)
    }

    pub fn collapse_all(&mut self) {
        self.entries.collapse_all();
    }

    pub fn open_overlay(&mut self, anchor: AnchorId) {
        if let Some(previous) = self.overlay.request_open(anchor) {
            log::trace!("overlay: {} closed by a newer overlay", previous);
        }
    }

    pub fn close_overlay(&mut self, anchor: &AnchorId) {
        self.overlay.request_close(anchor);
    }

    /// Generation a deferred close captures when it is scheduled
    pub fn overlay_generation(&self) -> u64 {
        self.overlay.generation()
    }

    /// Close scheduled at `opened_at`; skipped if `anchor` was reopened meanwhile
    pub fn close_overlay_deferred(&mut self, anchor: &AnchorId, opened_at: u64) {
        self.overlay.request_deferred_close(anchor, opened_at);
    }

    pub fn is_overlay_open(&self, anchor: &AnchorId) -> bool {
        self.overlay.is_open(anchor)
    }

    /// Called when the component unmounts or the page navigates away
    pub fn teardown(&mut self) {
        self.overlay.reset();
    }

    pub fn list(&self) -> &DisclosureList {
        &self.list
    }

    pub fn entries(&self) -> &EntryStates {
        &self.entries
    }

    pub fn overlay(&self) -> &OverlayCoordinator {
        &self.overlay
    }

    fn track_visible(&mut self) {
        for item in self.list.visible_items() {
            self.entries.track(&item.id);
        }
    }
}
