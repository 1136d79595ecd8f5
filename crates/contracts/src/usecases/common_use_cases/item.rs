use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a use case entry, unique within one list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UseCaseId(pub String);

impl UseCaseId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UseCaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UseCaseId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One entry of the common use cases list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseItem {
    pub id: UseCaseId,
    pub title: String,
    /// Body text shown when the entry is expanded (may be long)
    pub description: String,
    /// Reference into the icon registry, e.g. "quality-gate"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// Documentation link rendered under the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learn_more_url: Option<String>,
}

impl UseCaseItem {
    pub fn new(id: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: UseCaseId::new(id),
            title: title.into(),
            description: description.into(),
            icon_id: None,
            learn_more_url: None,
        }
    }

    pub fn with_icon(mut self, icon_id: impl Into<String>) -> Self {
        self.icon_id = Some(icon_id.into());
        self
    }

    pub fn with_learn_more(mut self, url: impl Into<String>) -> Self {
        self.learn_more_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_is_camel_case() {
        let item = UseCaseItem::new("delivery", "Delivery", "Deploy with stages")
            .with_icon("deploy");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "delivery");
        assert_eq!(json["iconId"], "deploy");
        assert!(json.get("learnMoreUrl").is_none());
    }

    #[test]
    fn test_item_without_optional_fields_deserializes() {
        let item: UseCaseItem =
            serde_json::from_str(r#"{"id":"x","title":"X","description":""}"#).unwrap();
        assert_eq!(item.id, UseCaseId::new("x"));
        assert_eq!(item.icon_id, None);
        assert_eq!(item.learn_more_url, None);
    }
}
