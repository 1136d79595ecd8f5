use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UseCasesConfig {
    pub disclosure: DisclosureConfig,
    pub overlay: OverlayConfig,
    pub icons: IconsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisclosureConfig {
    /// Entries revealed initially and per "show more" click
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Delay before an overlay closes after the pointer or focus leaves its anchor
    pub dismiss_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IconsConfig {
    pub svg_icon_location: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[disclosure]
page_size = 3

[overlay]
dismiss_delay_ms = 150

[icons]
svg_icon_location = "assets/icons/{{name}}.svg"
"#;

impl Default for UseCasesConfig {
    fn default() -> Self {
        load_config_from_str("").expect("embedded DEFAULT_CONFIG must be a complete configuration")
    }
}

/// Parse a TOML configuration on top of the embedded default.
///
/// Keys the host leaves out keep their default value.
pub fn load_config_from_str(contents: &str) -> anyhow::Result<UseCasesConfig> {
    let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    let overrides: toml::Table = toml::from_str(contents)?;
    merge_tables(&mut merged, overrides);

    let config: UseCasesConfig = toml::Value::Table(merged).try_into()?;
    Ok(config)
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(nested) if matches!(base.get(&key), Some(toml::Value::Table(_))) => {
                if let Some(toml::Value::Table(base_nested)) = base.get_mut(&key) {
                    merge_tables(base_nested, nested);
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Load the configuration supplied by the host page
///
/// Falls back to the embedded default when nothing is supplied or it does not parse.
pub fn load_config(source: Option<&str>) -> UseCasesConfig {
    let Some(contents) = source else {
        log::info!("Using default embedded use cases configuration");
        return UseCasesConfig::default();
    };

    match load_config_from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid use cases configuration, using defaults: {}", e);
            UseCasesConfig::default()
        }
    }
}

/// Read a `pageSize` override from a location query string such as `?pageSize=5`
pub fn page_size_from_query(search: &str) -> Option<usize> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("pageSize").and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<UseCasesConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), UseCasesConfig::default());
    }

    #[test]
    fn test_default_values() {
        let config = UseCasesConfig::default();
        assert_eq!(config.disclosure.page_size, 3);
        assert_eq!(config.overlay.dismiss_delay_ms, 150);
        assert_eq!(config.icons.svg_icon_location, "assets/icons/{{name}}.svg");
    }

    #[test]
    fn test_load_config_without_source_uses_default() {
        assert_eq!(load_config(None), UseCasesConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load_config_from_str("[disclosure]\npage_size = 5\n").unwrap();
        assert_eq!(config.disclosure.page_size, 5);
        assert_eq!(config.overlay.dismiss_delay_ms, 150);
        assert_eq!(config.icons.svg_icon_location, "assets/icons/{{name}}.svg");
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = load_config(Some("[disclosure]\npage_size = \"many\"\n"));
        assert_eq!(config, UseCasesConfig::default());

        let config = load_config(Some("not toml at all ["));
        assert_eq!(config, UseCasesConfig::default());
    }

    #[test]
    fn test_page_size_from_query() {
        assert_eq!(page_size_from_query("?pageSize=5"), Some(5));
        assert_eq!(page_size_from_query("?active=settings&pageSize=2"), Some(2));
        assert_eq!(page_size_from_query("?pageSize=abc"), None);
        assert_eq!(page_size_from_query(""), None);
    }
}
