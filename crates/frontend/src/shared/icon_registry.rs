//! Lookup from an item's `icon_id` to something the view can draw.
//!
//! The disclosure core only carries icon ids around; resolving them is a pure
//! lookup behind `IconRegistry` so hosts can plug in their own asset source.

use super::icons;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconAsset {
    /// Drawn by `shared::icons::icon`
    Inline(String),
    /// External SVG loaded through `<img src=...>`
    Url(String),
}

pub trait IconRegistry {
    fn resolve(&self, icon_id: &str) -> Option<IconAsset>;
}

/// First registry that knows the id wins
impl<A: IconRegistry, B: IconRegistry> IconRegistry for (A, B) {
    fn resolve(&self, icon_id: &str) -> Option<IconAsset> {
        self.0.resolve(icon_id).or_else(|| self.1.resolve(icon_id))
    }
}

/// Resolves the names drawn inline by `shared::icons`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineIconRegistry;

impl IconRegistry for InlineIconRegistry {
    fn resolve(&self, icon_id: &str) -> Option<IconAsset> {
        icons::has_icon(icon_id).then(|| IconAsset::Inline(icon_id.to_string()))
    }
}

/// Expands a location template such as `assets/icons/{{name}}.svg`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgIconLocation {
    template: String,
}

impl SvgIconLocation {
    pub const NAME_PLACEHOLDER: &'static str = "{{name}}";

    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl IconRegistry for SvgIconLocation {
    fn resolve(&self, icon_id: &str) -> Option<IconAsset> {
        let name = icon_id.trim();
        if name.is_empty() || !self.template.contains(Self::NAME_PLACEHOLDER) {
            return None;
        }
        Some(IconAsset::Url(
            self.template.replace(Self::NAME_PLACEHOLDER, name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_location_expands_template() {
        let registry = SvgIconLocation::new("assets/icons/{{name}}.svg");
        assert_eq!(
            registry.resolve("kubernetes"),
            Some(IconAsset::Url("assets/icons/kubernetes.svg".to_string()))
        );
        assert_eq!(registry.resolve("  "), None);
    }

    #[test]
    fn test_svg_location_without_placeholder_resolves_nothing() {
        let registry = SvgIconLocation::new("assets/icons/logo.svg");
        assert_eq!(registry.resolve("kubernetes"), None);
    }

    #[test]
    fn test_inline_registry() {
        assert_eq!(
            InlineIconRegistry.resolve("quality-gate"),
            Some(IconAsset::Inline("quality-gate".to_string()))
        );
        assert_eq!(InlineIconRegistry.resolve("kubernetes"), None);
    }

    #[test]
    fn test_chain_prefers_first_registry() {
        let registry = (InlineIconRegistry, SvgIconLocation::new("icons/{{name}}.svg"));
        assert_eq!(
            registry.resolve("git"),
            Some(IconAsset::Inline("git".to_string()))
        );
        assert_eq!(
            registry.resolve("helm"),
            Some(IconAsset::Url("icons/helm.svg".to_string()))
        );
    }
}
