use contracts::usecases::common_use_cases::UseCaseId;
use std::fmt;

/// Identifier of the affordance an overlay is anchored to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorId(pub String);

impl AnchorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    /// Anchor of the icon shown in the header of an entry
    pub fn for_entry_icon(id: &UseCaseId) -> Self {
        Self(format!("use-case-icon-{}", id))
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    OpenFor(AnchorId),
}

/// Keeps at most one overlay open.
///
/// Opening always wins; closing only applies when it names the open anchor, so a
/// delayed close from an anchor the pointer already left cannot hide a newer overlay.
/// Every open bumps `generation`, which lets a deferred close notice that its own
/// anchor was opened again in the meantime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayCoordinator {
    state: OverlayState,
    generation: u64,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay of `anchor`. Returns the anchor whose overlay got replaced.
    pub fn request_open(&mut self, anchor: AnchorId) -> Option<AnchorId> {
        self.generation = self.generation.wrapping_add(1);
        match std::mem::replace(&mut self.state, OverlayState::OpenFor(anchor)) {
            OverlayState::OpenFor(previous) if !self.is_open(&previous) => Some(previous),
            _ => None,
        }
    }

    /// Close the overlay of `anchor` if it is the open one. Returns whether it closed.
    pub fn request_close(&mut self, anchor: &AnchorId) -> bool {
        if self.is_open(anchor) {
            self.state = OverlayState::Closed;
            true
        } else {
            log::trace!("overlay: stale close for {} ignored", anchor);
            false
        }
    }

    /// Close scheduled when the generation was `opened_at`. Ignored if `anchor`
    /// is no longer open or was opened again since.
    pub fn request_deferred_close(&mut self, anchor: &AnchorId, opened_at: u64) -> bool {
        if self.generation != opened_at {
            log::trace!("overlay: deferred close for {} superseded by a newer open", anchor);
            return false;
        }
        self.request_close(anchor)
    }

    /// Number of opens so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_open(&self, anchor: &AnchorId) -> bool {
        matches!(&self.state, OverlayState::OpenFor(active) if active == anchor)
    }

    pub fn active(&self) -> Option<&AnchorId> {
        match &self.state {
            OverlayState::OpenFor(anchor) => Some(anchor),
            OverlayState::Closed => None,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = OverlayState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let overlay = OverlayCoordinator::new();
        assert_eq!(overlay.state(), &OverlayState::Closed);
        assert_eq!(overlay.active(), None);
    }

    #[test]
    fn test_open_replaces_previous() {
        let a = AnchorId::new("a");
        let b = AnchorId::new("b");
        let mut overlay = OverlayCoordinator::new();

        assert_eq!(overlay.request_open(a.clone()), None);
        assert_eq!(overlay.request_open(b.clone()), Some(a.clone()));
        assert!(!overlay.is_open(&a));
        assert!(overlay.is_open(&b));
    }

    #[test]
    fn test_reopen_same_anchor_replaces_nothing() {
        let a = AnchorId::new("a");
        let mut overlay = OverlayCoordinator::new();
        overlay.request_open(a.clone());
        assert_eq!(overlay.request_open(a.clone()), None);
        assert!(overlay.is_open(&a));
    }

    #[test]
    fn test_stale_close_is_ignored() {
        let a = AnchorId::new("a");
        let b = AnchorId::new("b");
        let mut overlay = OverlayCoordinator::new();
        overlay.request_open(a.clone());
        overlay.request_open(b.clone());

        assert!(!overlay.request_close(&a));
        assert!(overlay.is_open(&b));

        assert!(overlay.request_close(&b));
        assert_eq!(overlay.state(), &OverlayState::Closed);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut overlay = OverlayCoordinator::new();
        assert!(!overlay.request_close(&AnchorId::new("a")));
    }

    #[test]
    fn test_deferred_close_after_reopen_is_ignored() {
        let a = AnchorId::new("a");
        let mut overlay = OverlayCoordinator::new();
        overlay.request_open(a.clone());

        // pointer leaves, close scheduled
        let scheduled_at = overlay.generation();
        // pointer comes back before the timer fires
        overlay.request_open(a.clone());

        assert!(!overlay.request_deferred_close(&a, scheduled_at));
        assert!(overlay.is_open(&a));
    }

    #[test]
    fn test_deferred_close_without_reopen_closes() {
        let a = AnchorId::new("a");
        let mut overlay = OverlayCoordinator::new();
        overlay.request_open(a.clone());
        let scheduled_at = overlay.generation();

        assert!(overlay.request_deferred_close(&a, scheduled_at));
        assert_eq!(overlay.state(), &OverlayState::Closed);
    }

    #[test]
    fn test_deferred_close_for_replaced_anchor_is_ignored() {
        let a = AnchorId::new("a");
        let b = AnchorId::new("b");
        let mut overlay = OverlayCoordinator::new();
        overlay.request_open(a.clone());
        let scheduled_at = overlay.generation();
        overlay.request_open(b.clone());

        assert!(!overlay.request_deferred_close(&a, scheduled_at));
        assert!(overlay.is_open(&b));
    }

    #[test]
    fn test_reset() {
        let mut overlay = OverlayCoordinator::new();
        overlay.request_open(AnchorId::new("a"));
        overlay.reset();
        assert_eq!(overlay.active(), None);
    }

    #[test]
    fn test_entry_icon_anchor() {
        let anchor = AnchorId::for_entry_icon(&UseCaseId::new("quality-gates"));
        assert_eq!(anchor.0, "use-case-icon-quality-gates");
    }
}
