//! Icon CSS generation.
//!
//! Turns an icon reference plus style parameters into a CSS string scoped to
//! a caller-supplied selector. The icon is rendered via the mask-image
//! technique: the SVG becomes a `data:` URI used as a mask over a solid
//! color layer, so the `color` property recolors it. Pure string-in,
//! string-out; shared by the server render path and the editor preview path.

use std::fmt::Write;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::registry;

/// Characters escaped inside a CSS `data:` URI. Quotes, angle brackets and
/// `#` would otherwise terminate or corrupt the surrounding `url(...)`.
const DATA_URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'%')
    .add(b'{')
    .add(b'}')
    .add(b'&')
    .add(b'\\')
    .add(b'`')
    .add(b'(')
    .add(b')');

/// Parameters for one icon CSS block.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconStyle<'a> {
    /// Target selector; supports comma-separated compound selectors.
    pub selector: &'a str,
    /// Raw SVG markup. Wins over `icon_name` when non-empty.
    pub icon: Option<&'a str>,
    /// Library icon name, resolved against the built-in registry.
    pub icon_name: Option<&'a str>,
    pub custom_icon_color: Option<&'a str>,
    pub icon_size: Option<&'a str>,
    pub icon_spacing: Option<&'a str>,
}

/// Append a suffix to every comma-separated branch of a selector list.
pub fn append_selectors(selectors: &str, append: &str) -> String {
    selectors
        .split(',')
        .map(|subselector| {
            if append.is_empty() {
                subselector.to_string()
            } else {
                format!("{subselector} {append}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode SVG markup as a minified CSS `data:` URI.
pub fn svg_to_data_uri(svg: &str) -> String {
    let collapsed = svg.split_whitespace().collect::<Vec<_>>().join(" ");
    format!(
        "data:image/svg+xml,{}",
        utf8_percent_encode(&collapsed, DATA_URI)
    )
}

/// Generate the CSS for one icon, or an empty string when no SVG can be
/// produced from the given inputs. Never fails.
pub fn generate_icon_css(style: &IconStyle<'_>) -> String {
    let svg = match style.icon.filter(|s| !s.is_empty()) {
        Some(svg) => Some(svg),
        None => style
            .icon_name
            .filter(|s| !s.is_empty())
            .and_then(registry::lookup),
    };
    let Some(svg) = svg else {
        return String::new();
    };

    let data_uri = svg_to_data_uri(svg);
    let mut rules = vec![
        format!("mask-image: url({data_uri}) !important;"),
        format!("-webkit-mask-image: url({data_uri}) !important;"),
    ];

    if let Some(size) = style.icon_size.filter(|s| !s.is_empty()) {
        rules.push(format!("width: {size} !important;"));
        rules.push(format!("height: {size} !important;"));
    }
    if let Some(color) = style.custom_icon_color.filter(|s| !s.is_empty()) {
        rules.push(format!("color: {color};"));
    }

    let mut output = format!(
        "{} {{ {} }}",
        append_selectors(style.selector, ""),
        rules.join(" ")
    );

    // Spacing lands on the link element itself, not the pseudo-element:
    // truncate the selector at the first `::`.
    if let Some(spacing) = style.icon_spacing.filter(|s| !s.is_empty()) {
        let link_selector = style.selector.split("::").next().unwrap_or(style.selector);
        let _ = write!(
            output,
            "\n{} {{ gap: {} !important; }}",
            link_selector, spacing
        );
    }

    output
}
