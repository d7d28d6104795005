//! SVG sanitization for author-supplied icon markup.
//!
//! A fixed allow-list of SVG elements and per-element attributes; everything
//! else is stripped. Event-handler attributes (`on*`) are rejected before the
//! allow-list is even consulted, so widening the table can never reintroduce
//! them. Input that cannot be scanned as markup degrades to a stripped or
//! empty string rather than failing the render.

use std::sync::OnceLock;

use regex::Regex;

use crate::scanner::{Tag, TagKind, TagScanner};

/// Allowed SVG elements and the attributes each may carry.
///
/// This table is a versioned security contract: widening it is a
/// security-relevant change and needs review.
const ALLOWED_SVG: &[(&str, &[&str])] = &[
    (
        "svg",
        &[
            "xmlns",
            "fill",
            "viewbox",
            "role",
            "aria-hidden",
            "focusable",
            "width",
            "height",
            "class",
        ],
    ),
    (
        "path",
        &[
            "d",
            "fill",
            "stroke",
            "stroke-width",
            "stroke-linecap",
            "stroke-linejoin",
        ],
    ),
    ("circle", &["cx", "cy", "r", "fill", "stroke"]),
    ("rect", &["x", "y", "width", "height", "fill", "stroke"]),
    ("polygon", &["points", "fill", "stroke"]),
    ("polyline", &["points", "fill", "stroke"]),
    ("line", &["x1", "y1", "x2", "y2", "stroke"]),
    ("g", &["fill", "stroke"]),
];

fn allowed_attributes(element: &str) -> Option<&'static [&'static str]> {
    ALLOWED_SVG
        .iter()
        .find(|(name, _)| *name == element)
        .map(|(_, attrs)| *attrs)
}

/// Elements whose text content is dropped along with the tags themselves.
const DROP_CONTENT: &[&str] = &["script", "style"];

/// Strip an SVG markup string down to the allow-list.
///
/// Disallowed elements lose their tags but keep their text content, except
/// for `<script>`/`<style>` whose content is dropped entirely. Comments,
/// doctypes and processing instructions are removed. Never fails.
pub fn sanitize_svg(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut scanner = TagScanner::new(raw);
    let mut pos = 0;

    while let Some(tag) = scanner.next_tag() {
        out.push_str(&raw[pos..tag.start]);
        pos = tag.end;

        match tag.kind {
            TagKind::Comment | TagKind::Markup => {}
            TagKind::Close => {
                let name = tag.name(raw).to_ascii_lowercase();
                if allowed_attributes(&name).is_some() {
                    out.push_str("</");
                    out.push_str(&name);
                    out.push('>');
                }
            }
            TagKind::Open => {
                let name = tag.name(raw).to_ascii_lowercase();
                if DROP_CONTENT.contains(&name.as_str()) && !tag.self_closing {
                    pos = skip_element_content(raw, &mut scanner, &name).unwrap_or(raw.len());
                    continue;
                }
                if let Some(allowed) = allowed_attributes(&name) {
                    write_sanitized_tag(&mut out, raw, &tag, allowed);
                }
            }
        }
    }
    // Whatever trails the last parsed tag is text, except for an unterminated
    // tag fragment, which must not be echoed back into markup.
    let tail = &raw[pos..];
    let cut = tail.find('<').unwrap_or(tail.len());
    out.push_str(&tail[..cut]);
    out
}

/// Advance the scanner past the matching close tag and return the offset
/// just after it. `None` when the element is never closed.
fn skip_element_content(raw: &str, scanner: &mut TagScanner<'_>, name: &str) -> Option<usize> {
    while let Some(tag) = scanner.next_tag() {
        if tag.is_close(raw, name) {
            return Some(tag.end);
        }
    }
    None
}

fn write_sanitized_tag(out: &mut String, raw: &str, tag: &Tag, allowed: &[&str]) {
    out.push('<');
    out.push_str(&tag.name(raw).to_ascii_lowercase());

    for attr in &tag.attributes {
        let attr_name = &raw[attr.name.0..attr.name.1];
        let lower = attr_name.to_ascii_lowercase();
        // Hard invariant: event handlers never survive, allow-list or not.
        if lower.starts_with("on") {
            continue;
        }
        if !allowed.contains(&lower.as_str()) {
            continue;
        }
        out.push(' ');
        out.push_str(attr_name);
        if let Some((start, end)) = attr.value {
            out.push_str("=\"");
            out.push_str(&raw[start..end].replace('"', "&quot;"));
            out.push('"');
        }
    }

    if tag.self_closing {
        out.push_str(" />");
    } else {
        out.push('>');
    }
}

/// Reduce an arbitrary string to a safe CSS class token: everything outside
/// `[A-Za-z0-9_-]` is removed.
pub fn sanitize_class_token(value: &str) -> String {
    static INVALID: OnceLock<Regex> = OnceLock::new();
    let invalid = INVALID.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid regex"));
    invalid.replace_all(value, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_allowed_structure() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M4 4h16" fill="none"/></svg>"#;
        let out = sanitize_svg(svg);
        assert_eq!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M4 4h16" fill="none" /></svg>"#
        );
    }

    #[test]
    fn strips_script_tag_and_content() {
        let svg = "<svg><script>alert(1)</script><path d=\"M0 0\"/></svg>";
        let out = sanitize_svg(svg);
        assert!(!out.contains("script"));
        assert!(!out.contains("alert"));
        assert!(out.contains("<path"));
    }

    #[test]
    fn strips_event_handler_attributes() {
        let svg = r#"<svg onclick="steal()" viewBox="0 0 24 24"><path onmouseover="x()" d="M0 0"/></svg>"#;
        let out = sanitize_svg(svg);
        assert!(!out.contains("onclick"));
        assert!(!out.contains("onmouseover"));
        assert!(out.contains("viewBox=\"0 0 24 24\""));
    }

    #[test]
    fn drops_disallowed_elements_but_keeps_text() {
        let svg = "<svg><title>Bolt</title><path d=\"M0 0\"/></svg>";
        let out = sanitize_svg(svg);
        assert!(!out.contains("<title>"));
        assert!(out.contains("Bolt"));
    }

    #[test]
    fn drops_disallowed_attributes_on_allowed_elements() {
        let svg = r#"<rect x="0" y="0" width="10" height="10" rx="2" data-track="1"/>"#;
        let out = sanitize_svg(svg);
        assert!(out.contains("width=\"10\""));
        assert!(!out.contains("rx="));
        assert!(!out.contains("data-track"));
    }

    #[test]
    fn removes_comments_and_doctype() {
        let svg = "<!DOCTYPE svg><!-- hi --><svg><g fill=\"red\"></g></svg>";
        let out = sanitize_svg(svg);
        assert_eq!(out, "<svg><g fill=\"red\"></g></svg>");
    }

    #[test]
    fn malformed_input_degrades_silently() {
        assert_eq!(sanitize_svg("<svg"), "");
        assert_eq!(sanitize_svg("plain text"), "plain text");
        // Unclosed script swallows the rest rather than leaking it.
        assert_eq!(sanitize_svg("<svg><script>alert(1)"), "<svg>");
    }

    #[test]
    fn class_token_sanitization() {
        assert_eq!(sanitize_class_token("bolt"), "bolt");
        assert_eq!(sanitize_class_token("arrow right!"), "arrowright");
        assert_eq!(sanitize_class_token("a<b>\"c"), "abc");
        assert_eq!(sanitize_class_token("vivid-cyan-blue"), "vivid-cyan-blue");
    }
}
