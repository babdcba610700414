//! Article metadata shown and shared by the widget.

use serde::{Deserialize, Serialize};

/// Immutable description of the article the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
    /// Human-readable publication date (e.g., "28 Jun 2020").
    #[serde(rename = "date", alias = "published_date")]
    pub published_date: String,
}

impl ArticleMetadata {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        published_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: author.into(),
            published_date: published_date.into(),
        }
    }
}

impl Default for ArticleMetadata {
    fn default() -> Self {
        Self::new(
            "Shift the overall look and feel by adding these wonderful touches to furniture in your home",
            "Ever been in a room and felt like something was missing? Perhaps it felt slightly bare and uninviting. I've got some simple tips to help you make any room feel complete.",
            "Michelle Appleton",
            "28 Jun 2020",
        )
    }
}
