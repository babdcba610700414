//! Widget configuration.
//!
//! The configuration is plain JSON so a page can embed it next to the
//! markup it describes. Every field has a default matching the stock
//! article page.

use serde::{Deserialize, Serialize};

use crate::article::ArticleMetadata;
use crate::error::{WidgetError, WidgetResult};

/// CSS selectors used to find the widget's elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub share_button: String,
    pub share_popup: String,
    pub toast: String,
    /// Matches every social icon; each carries a `data-platform` attribute.
    pub social_icons: String,
    pub article_title: String,
    pub author_avatar: String,
    pub author_name: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            share_button: "#shareBtn".to_string(),
            share_popup: "#sharePopup".to_string(),
            toast: "#toast".to_string(),
            social_icons: ".social-icon".to_string(),
            article_title: ".article-title".to_string(),
            author_avatar: ".author-avatar".to_string(),
            author_name: ".author-details h3".to_string(),
        }
    }
}

impl Selectors {
    /// Field name and selector for every entry.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("share_button", self.share_button.as_str()),
            ("share_popup", self.share_popup.as_str()),
            ("toast", self.toast.as_str()),
            ("social_icons", self.social_icons.as_str()),
            ("article_title", self.article_title.as_str()),
            ("author_avatar", self.author_avatar.as_str()),
            ("author_name", self.author_name.as_str()),
        ]
    }

    /// Reject blank selectors before they reach `querySelector`.
    pub fn validate(&self) -> WidgetResult<()> {
        for (name, selector) in self.entries() {
            if selector.trim().is_empty() {
                return Err(WidgetError::Config(format!("selector `{}` is empty", name)));
            }
        }
        Ok(())
    }
}

/// Complete widget configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub article: ArticleMetadata,
    pub selectors: Selectors,
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.selectors.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> WidgetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.selectors.share_button, "#shareBtn");
        assert_eq!(config.article.author, "Michelle Appleton");
    }

    #[test]
    fn test_partial_override() {
        let json = r##"{
            "article": {"title": "T", "description": "D", "author": "Ada", "date": "today"},
            "selectors": {"toast": "#notice"}
        }"##;
        let config = WidgetConfig::from_json(json).unwrap();
        assert_eq!(config.article.author, "Ada");
        assert_eq!(config.selectors.toast, "#notice");
        assert_eq!(config.selectors.share_popup, "#sharePopup");
    }

    #[test]
    fn test_blank_selector_rejected() {
        let json = r#"{"selectors": {"share_button": "  "}}"#;
        let err = WidgetConfig::from_json(json).unwrap_err();
        match err {
            WidgetError::Config(msg) => assert!(msg.contains("share_button")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            WidgetConfig::from_json("{\"article\": 3"),
            Err(WidgetError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = WidgetConfig::default();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"date\""));
        assert_eq!(WidgetConfig::from_json(&json).unwrap(), config);
    }
}
