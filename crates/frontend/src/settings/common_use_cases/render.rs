use super::state::CommonUseCasesState;
use crate::shared::disclosure::AnchorId;
use crate::shared::icon_registry::{IconAsset, IconRegistry};
use contracts::usecases::common_use_cases::UseCaseId;

/// Everything the view needs to draw one frame, derived from the state alone
#[derive(Debug, Clone, PartialEq)]
pub struct UseCasesRender {
    pub entries: Vec<EntryRender>,
    /// `None` when every entry is already visible
    pub show_more: Option<ShowMoreRender>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryRender {
    pub id: UseCaseId,
    pub title: String,
    pub description: String,
    pub learn_more_url: Option<String>,
    pub expanded: bool,
    pub icon: Option<IconRender>,
}

/// Identity of an entry's static content; expansion and overlay state are left out
pub type EntryKey = (UseCaseId, String, String, Option<String>, Option<IconAsset>);

impl EntryRender {
    pub fn key(&self) -> EntryKey {
        (
            self.id.clone(),
            self.title.clone(),
            self.description.clone(),
            self.learn_more_url.clone(),
            self.icon.as_ref().map(|i| i.asset.clone()),
        )
    }

    pub fn panel_class(&self) -> &'static str {
        if self.expanded {
            "use-case-panel use-case-panel--expanded"
        } else {
            "use-case-panel use-case-panel--collapsed"
        }
    }

    pub fn chevron_icon(&self) -> &'static str {
        if self.expanded {
            "chevron-down"
        } else {
            "chevron-right"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconRender {
    pub anchor: AnchorId,
    pub asset: IconAsset,
    pub overlay_open: bool,
    /// Overlay text
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowMoreRender {
    pub remaining: usize,
    pub next_page_len: usize,
}

impl ShowMoreRender {
    pub fn label(&self) -> String {
        format!("Show {} more ({} hidden)", self.next_page_len, self.remaining)
    }
}

impl CommonUseCasesState {
    pub fn render(&self, icons: &impl IconRegistry) -> UseCasesRender {
        let entries = self
            .visible_items()
            .iter()
            .map(|item| {
                let icon = item.icon_id.as_deref().and_then(|icon_id| {
                    let Some(asset) = icons.resolve(icon_id) else {
                        log::trace!("common use cases: icon {} not resolved", icon_id);
                        return None;
                    };
                    let anchor = AnchorId::for_entry_icon(&item.id);
                    Some(IconRender {
                        overlay_open: self.is_overlay_open(&anchor),
                        anchor,
                        asset,
                        tooltip: item.title.clone(),
                    })
                });

                EntryRender {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    description: item.description.clone(),
                    learn_more_url: item.learn_more_url.clone(),
                    expanded: self.is_expanded(&item.id),
                    icon,
                }
            })
            .collect();

        let list = self.list();
        let show_more = list.has_more().then(|| ShowMoreRender {
            remaining: list.remaining(),
            next_page_len: list.next_page_len(),
        });

        UseCasesRender { entries, show_more }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::icon_registry::{InlineIconRegistry, SvgIconLocation};
    use contracts::usecases::common_use_cases::UseCaseItem;

    fn state(page_size: usize) -> CommonUseCasesState {
        let items = vec![
            UseCaseItem::new("delivery", "Delivery", "Deploy").with_icon("deploy"),
            UseCaseItem::new("helm", "Helm", "Charts").with_icon("helm"),
            UseCaseItem::new("plain", "Plain", "No icon"),
        ];
        CommonUseCasesState::new(items, page_size).unwrap()
    }

    #[test]
    fn test_render_visible_window_and_show_more() {
        let render = state(2).render(&InlineIconRegistry);
        assert_eq!(render.entries.len(), 2);
        assert_eq!(
            render.show_more,
            Some(ShowMoreRender {
                remaining: 1,
                next_page_len: 1
            })
        );
        assert_eq!(render.show_more.unwrap().label(), "Show 1 more (1 hidden)");
    }

    #[test]
    fn test_render_hides_show_more_when_exhausted() {
        let render = state(5).render(&InlineIconRegistry);
        assert_eq!(render.entries.len(), 3);
        assert_eq!(render.show_more, None);
    }

    #[test]
    fn test_render_icons_through_registry() {
        let render = state(3).render(&InlineIconRegistry);
        assert_eq!(
            render.entries[0].icon.as_ref().map(|i| &i.asset),
            Some(&IconAsset::Inline("deploy".to_string()))
        );
        // unknown to the inline registry
        assert!(render.entries[1].icon.is_none());
        assert!(render.entries[2].icon.is_none());

        let chained = (InlineIconRegistry, SvgIconLocation::new("assets/icons/{{name}}.svg"));
        let render = state(3).render(&chained);
        assert_eq!(
            render.entries[1].icon.as_ref().map(|i| &i.asset),
            Some(&IconAsset::Url("assets/icons/helm.svg".to_string()))
        );
    }

    #[test]
    fn test_render_reflects_expansion_and_overlay() {
        let mut state = state(3);
        let id = UseCaseId::new("delivery");
        state.toggle(&id);
        state.open_overlay(AnchorId::for_entry_icon(&id));

        let render = state.render(&InlineIconRegistry);
        let entry = &render.entries[0];
        assert!(entry.expanded);
        assert_eq!(entry.panel_class(), "use-case-panel use-case-panel--expanded");
        assert_eq!(entry.chevron_icon(), "chevron-down");
        assert!(entry.icon.as_ref().unwrap().overlay_open);
        assert!(!render.entries[1].expanded);
    }
}
