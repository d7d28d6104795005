//! Markup injection for one rendered navigation item.
//!
//! Operates on the item's generated markup string: icon classes go on the
//! list-item wrapper, sizing custom properties go on the content anchor, and
//! the icon wrapper element is inserted just inside that anchor. Every step
//! is individually skippable; a missing wrapper or anchor is never fatal to
//! the render.

use std::fmt::Write;

use tracing::debug;

use crate::resolve::EffectiveSettings;
use crate::sanitize::sanitize_class_token;
use crate::scanner::{add_classes, append_style, Tag, TagScanner};

/// Marker class carried by the anchor that holds the item's visible content.
/// Other anchors in the same markup (submenu toggles and the like) are left
/// alone.
pub const ITEM_CONTENT_CLASS: &str = "nav-item__content";

/// Class of the inline wrapper element the icon is rendered in.
pub const ICON_WRAPPER_CLASS: &str = "nav-item__icon";

/// Rewrite one navigation item's markup to carry its icon.
///
/// `icon_identifier` names the icon for the `has-icon__*` class; it is
/// class-sanitized here. `sanitized_icon` must already have passed
/// [`crate::sanitize::sanitize_svg`] and may be empty (the wrapper is still
/// emitted so stylesheet-driven icons have an element to mask).
pub fn inject_icon(
    markup: &str,
    settings: &EffectiveSettings,
    sanitized_icon: &str,
    icon_identifier: &str,
) -> String {
    let mut html = markup.to_string();

    // Wrapper classes on the first list-item element.
    let icon_class = format!("has-icon__{}", sanitize_class_token(icon_identifier));
    let mut classes = vec![icon_class.as_str()];
    if settings.justify_space_between {
        classes.push("has-justified-space-between");
    }
    if settings.has_no_icon_fill {
        classes.push("has-no-icon-fill");
    }
    if settings.icon_position_left {
        classes.push("has-icon-position__left");
    }

    let wrapper = TagScanner::new(&html).next_open_tag("li");
    match wrapper {
        Some(li) => html = add_classes(&html, &li, &classes),
        None => debug!("no list-item wrapper in item markup, skipping icon classes"),
    }

    // Sizing custom properties on the content anchor.
    let mut link_styles = Vec::new();
    if let Some(size) = settings.icon_size() {
        link_styles.push(format!("--icon-size:{size}"));
    }
    if let Some(spacing) = settings.icon_spacing() {
        link_styles.push(format!("--icon-spacing:{spacing}"));
    }
    if !link_styles.is_empty() {
        match find_content_anchor(&html) {
            Some(anchor) => html = append_style(&html, &anchor, &link_styles.join(";")),
            None => debug!("no content anchor in item markup, skipping inline sizing"),
        }
    }

    // The icon wrapper itself, just inside the content anchor.
    let icon_markup = build_icon_wrapper(settings, sanitized_icon);
    if let Some(anchor) = find_content_anchor(&html) {
        if settings.icon_position_left {
            html.insert_str(anchor.end, &icon_markup);
        } else if let Some(close) = find_close_after(&html, "a", anchor.end) {
            html.insert_str(close.start, &icon_markup);
        } else {
            debug!("content anchor never closes, skipping icon insertion");
        }
    } else {
        debug!("no content anchor in item markup, skipping icon insertion");
    }

    html
}

/// First anchor whose class list contains the content marker class.
fn find_content_anchor(html: &str) -> Option<Tag> {
    let mut scanner = TagScanner::new(html);
    while let Some(tag) = scanner.next_open_tag("a") {
        if tag.class_contains(html, ITEM_CONTENT_CLASS) {
            return Some(tag);
        }
    }
    None
}

/// First closing tag with the given name starting at or after `from`.
fn find_close_after(html: &str, name: &str, from: usize) -> Option<Tag> {
    let mut scanner = TagScanner::new(html);
    while let Some(tag) = scanner.next_tag() {
        if tag.start >= from && tag.is_close(html, name) {
            return Some(tag);
        }
    }
    None
}

fn build_icon_wrapper(settings: &EffectiveSettings, sanitized_icon: &str) -> String {
    let mut span = String::from("<span class=\"");
    span.push_str(ICON_WRAPPER_CLASS);
    if let Some(color_class) = settings.color_class() {
        span.push(' ');
        span.push_str(&color_class);
    }
    span.push_str("\" aria-hidden=\"true\"");
    if let Some(color) = settings.inline_color() {
        let _ = write!(span, " style=\"color:{};\"", color.replace('"', "&quot;"));
    }
    span.push('>');
    span.push_str(sanitized_icon);
    span.push_str("</span>");
    span
}
