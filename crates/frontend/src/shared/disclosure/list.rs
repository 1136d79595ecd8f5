use super::error::DisclosureError;
use contracts::usecases::common_use_cases::UseCaseItem;

/// Ordered items with a monotonically growing visible window.
///
/// Invariant: `visible_count <= items.len()`. The window only ever grows within
/// one list lifetime, so already rendered entries never move.
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureList {
    items: Vec<UseCaseItem>,
    visible_count: usize,
    page_size: usize,
}

impl DisclosureList {
    pub fn initialize(items: Vec<UseCaseItem>, page_size: usize) -> Result<Self, DisclosureError> {
        if page_size == 0 {
            return Err(DisclosureError::InvalidConfiguration { page_size });
        }

        let visible_count = page_size.min(items.len());
        Ok(Self {
            items,
            visible_count,
            page_size,
        })
    }

    /// Prefix of the items that is currently rendered
    pub fn visible_items(&self) -> &[UseCaseItem] {
        &self.items[..self.visible_count]
    }

    /// Reveal the next page. Calling it when everything is visible is a no-op.
    pub fn show_more(&mut self) {
        let next = self
            .visible_count
            .saturating_add(self.page_size)
            .min(self.items.len());
        if next != self.visible_count {
            log::debug!(
                "disclosure: show more {} -> {} of {}",
                self.visible_count,
                next,
                self.items.len()
            );
        }
        self.visible_count = next;
    }

    pub fn has_more(&self) -> bool {
        self.visible_count < self.items.len()
    }

    /// Number of items still hidden behind "show more"
    pub fn remaining(&self) -> usize {
        self.items.len() - self.visible_count
    }

    /// How many items the next `show_more` reveals
    pub fn next_page_len(&self) -> usize {
        self.page_size.min(self.remaining())
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
