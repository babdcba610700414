//! Share targets and the URLs they open.

use std::fmt;

use crate::article::ArticleMetadata;

/// Social platforms the popup can share to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    Facebook,
    Twitter,
    Pinterest,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [Self::Facebook, Self::Twitter, Self::Pinterest];

    /// Look up a target by its `data-platform` identifier.
    ///
    /// Identifiers are matched exactly; anything else is unknown.
    pub fn from_platform(id: &str) -> Option<Self> {
        match id {
            "facebook" => Some(Self::Facebook),
            "twitter" => Some(Self::Twitter),
            "pinterest" => Some(Self::Pinterest),
            _ => None,
        }
    }

    /// The `data-platform` identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Pinterest => "pinterest",
        }
    }

    /// Capitalized name used in toasts.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Pinterest => "Pinterest",
        }
    }

    /// Whether the system share dialog is tried before the share window.
    pub fn prefers_native_share(self) -> bool {
        matches!(self, Self::Twitter)
    }

    /// Build the share URL for this platform.
    ///
    /// None of the current templates use the description; Pinterest's
    /// description slot carries the article title.
    pub fn share_url(self, page_url: &str, title: &str, _description: &str) -> String {
        let url = urlencoding::encode(page_url);
        match self {
            Self::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
            Self::Twitter => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                url,
                urlencoding::encode(title)
            ),
            Self::Pinterest => format!(
                "https://pinterest.com/pin/create/button/?url={}&description={}",
                url,
                urlencoding::encode(title)
            ),
        }
    }

    /// Build the share URL for an article.
    pub fn article_url(self, page_url: &str, article: &ArticleMetadata) -> String {
        self.share_url(page_url, &article.title, &article.description)
    }
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Payload for the host's native share dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    pub fn for_article(article: &ArticleMetadata, page_url: &str) -> Self {
        Self {
            title: article.title.clone(),
            text: article.description.clone(),
            url: page_url.to_string(),
        }
    }
}

/// Size of a share popup window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFeatures {
    pub width: u32,
    pub height: u32,
}

/// All share windows open at 600x400.
pub const SHARE_WINDOW: WindowFeatures = WindowFeatures {
    width: 600,
    height: 400,
};

impl fmt::Display for WindowFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width={},height={}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/articles/1?ref=home";

    #[test]
    fn test_from_platform() {
        assert_eq!(ShareTarget::from_platform("facebook"), Some(ShareTarget::Facebook));
        assert_eq!(ShareTarget::from_platform("twitter"), Some(ShareTarget::Twitter));
        assert_eq!(ShareTarget::from_platform("pinterest"), Some(ShareTarget::Pinterest));
        assert_eq!(ShareTarget::from_platform("Facebook"), None);
        assert_eq!(ShareTarget::from_platform("unknown"), None);
        assert_eq!(ShareTarget::from_platform(""), None);
    }

    #[test]
    fn test_id_round_trips_through_lookup() {
        for target in ShareTarget::ALL {
            assert_eq!(ShareTarget::from_platform(target.id()), Some(target));
        }
    }

    #[test]
    fn test_display_name_is_capitalized() {
        assert_eq!(ShareTarget::Facebook.to_string(), "Facebook");
        assert_eq!(ShareTarget::Pinterest.display_name(), "Pinterest");
    }

    #[test]
    fn test_facebook_url_encodes_page() {
        let url = ShareTarget::Facebook.share_url(PAGE, "Title", "Desc");
        assert_eq!(
            url,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Farticles%2F1%3Fref%3Dhome"
        );
    }

    #[test]
    fn test_twitter_url_carries_title() {
        let url = ShareTarget::Twitter.share_url(PAGE, "Room & Home", "Desc");
        assert!(url.starts_with("https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com"));
        assert!(url.ends_with("&text=Room%20%26%20Home"));
    }

    #[test]
    fn test_pinterest_description_is_title() {
        let url = ShareTarget::Pinterest.share_url(PAGE, "My Title", "Other text");
        assert!(url.ends_with("&description=My%20Title"));
        assert!(!url.contains("Other"));
    }

    #[test]
    fn test_only_twitter_prefers_native_share() {
        assert!(ShareTarget::Twitter.prefers_native_share());
        assert!(!ShareTarget::Facebook.prefers_native_share());
        assert!(!ShareTarget::Pinterest.prefers_native_share());
    }

    #[test]
    fn test_window_features() {
        assert_eq!(SHARE_WINDOW.to_string(), "width=600,height=400");
    }

    #[test]
    fn test_share_request_for_article() {
        let article = ArticleMetadata::default();
        let request = ShareRequest::for_article(&article, PAGE);
        assert_eq!(request.title, article.title);
        assert_eq!(request.text, article.description);
        assert_eq!(request.url, PAGE);
    }
}
