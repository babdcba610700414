//! Plain-text preview of what the widget would share.

use std::fmt::Write;

use sharewidget_core::{KeyBindings, SHARE_WINDOW, ShareTarget, WidgetConfig};

/// Describe the article, every share link and the key bindings.
pub fn render_preview(config: &WidgetConfig, page_url: &str) -> String {
    let article = &config.article;
    let mut out = String::new();

    let _ = writeln!(out, "{}", article.title);
    let _ = writeln!(out, "by {} ({})", article.author, article.published_date);
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Share links ({}) ===", SHARE_WINDOW);
    for target in ShareTarget::ALL {
        let _ = writeln!(out, "  {:10} {}", target, target.article_url(page_url, article));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Keyboard ===");
    let _ = writeln!(out, "{}", KeyBindings::describe());
    out
}
