//! Forward-scanning tag scanner for generated markup.
//!
//! A single forward pass over the markup string yields tags with byte spans,
//! without building a DOM. The navigation markup this crate rewrites is always
//! a single list-item element wrapping an anchor, so positional splicing on
//! the original string is enough. The scanner is lenient: anything that does
//! not parse as a tag is treated as text, and an unterminated tag at the end
//! of input is ignored.

/// Byte span into the scanned string. Always lies on char boundaries because
/// spans begin and end at ASCII delimiters.
pub type Span = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name ...>` or `<name ... />`
    Open,
    /// `</name>`
    Close,
    /// `<!-- ... -->`
    Comment,
    /// `<!...>` or `<?...>` (doctype, processing instruction)
    Markup,
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: Span,
    /// Span of the attribute value without surrounding quotes. `None` for
    /// valueless attributes.
    pub value: Option<Span>,
}

/// A single scanned tag with byte spans into the source string.
#[derive(Debug, Clone)]
pub struct Tag {
    pub kind: TagKind,
    /// Offset of the opening `<`.
    pub start: usize,
    /// Offset just past the closing `>`.
    pub end: usize,
    name: Span,
    /// Offset where new attributes can be spliced in: just before `>` or `/>`.
    interior_end: usize,
    pub self_closing: bool,
    pub attributes: Vec<Attribute>,
}

impl Tag {
    pub fn name<'a>(&self, html: &'a str) -> &'a str {
        &html[self.name.0..self.name.1]
    }

    pub fn is(&self, html: &str, name: &str) -> bool {
        self.kind == TagKind::Open && self.name(html).eq_ignore_ascii_case(name)
    }

    pub fn is_close(&self, html: &str, name: &str) -> bool {
        self.kind == TagKind::Close && self.name(html).eq_ignore_ascii_case(name)
    }

    fn find_attribute(&self, html: &str, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| html[a.name.0..a.name.1].eq_ignore_ascii_case(name))
    }

    /// Value of the named attribute, if present with a value.
    pub fn attribute<'a>(&self, html: &'a str, name: &str) -> Option<&'a str> {
        self.find_attribute(html, name)
            .and_then(|a| a.value)
            .map(|(s, e)| &html[s..e])
    }

    /// True when the class attribute contains `token` as a whole
    /// whitespace-separated token.
    pub fn class_contains(&self, html: &str, token: &str) -> bool {
        self.attribute(html, "class")
            .is_some_and(|v| v.split_whitespace().any(|t| t == token))
    }

    fn attribute_value_span(&self, html: &str, name: &str) -> Option<Span> {
        self.find_attribute(html, name).and_then(|a| a.value)
    }
}

pub struct TagScanner<'a> {
    html: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    pub fn new(html: &'a str) -> Self {
        Self { html, pos: 0 }
    }

    /// Advance to the next tag of any kind.
    pub fn next_tag(&mut self) -> Option<Tag> {
        let bytes = self.html.as_bytes();
        let len = bytes.len();

        while self.pos < len {
            let start = match bytes[self.pos..].iter().position(|&b| b == b'<') {
                Some(rel) => self.pos + rel,
                None => {
                    self.pos = len;
                    return None;
                }
            };
            let mut i = start + 1;
            if i >= len {
                self.pos = len;
                return None;
            }

            match bytes[i] {
                b'!' if self.html[i..].starts_with("!--") => {
                    let end = match self.html[i + 3..].find("-->") {
                        Some(rel) => i + 3 + rel + 3,
                        None => len,
                    };
                    self.pos = end;
                    return Some(Tag {
                        kind: TagKind::Comment,
                        start,
                        end,
                        name: (start, start),
                        interior_end: end,
                        self_closing: false,
                        attributes: Vec::new(),
                    });
                }
                b'!' | b'?' => {
                    let end = match bytes[i..].iter().position(|&b| b == b'>') {
                        Some(rel) => i + rel + 1,
                        None => len,
                    };
                    self.pos = end;
                    return Some(Tag {
                        kind: TagKind::Markup,
                        start,
                        end,
                        name: (start, start),
                        interior_end: end,
                        self_closing: false,
                        attributes: Vec::new(),
                    });
                }
                b'/' => {
                    i += 1;
                    let name_start = i;
                    while i < len && is_name_byte(bytes[i]) {
                        i += 1;
                    }
                    if i == name_start {
                        // "</" with no name: literal text
                        self.pos = start + 1;
                        continue;
                    }
                    let name = (name_start, i);
                    let end = match bytes[i..].iter().position(|&b| b == b'>') {
                        Some(rel) => i + rel + 1,
                        None => {
                            self.pos = len;
                            return None;
                        }
                    };
                    self.pos = end;
                    return Some(Tag {
                        kind: TagKind::Close,
                        start,
                        end,
                        name,
                        interior_end: end - 1,
                        self_closing: false,
                        attributes: Vec::new(),
                    });
                }
                b if b.is_ascii_alphabetic() => {
                    if let Some(tag) = self.scan_open_tag(start) {
                        return Some(tag);
                    }
                    // Unterminated tag: nothing more to yield.
                    return None;
                }
                _ => {
                    // Literal '<' in text content.
                    self.pos = start + 1;
                }
            }
        }

        None
    }

    /// Advance to the next open tag with the given name.
    pub fn next_open_tag(&mut self, name: &str) -> Option<Tag> {
        while let Some(tag) = self.next_tag() {
            if tag.is(self.html, name) {
                return Some(tag);
            }
        }
        None
    }

    fn scan_open_tag(&mut self, start: usize) -> Option<Tag> {
        let bytes = self.html.as_bytes();
        let len = bytes.len();
        let mut i = start + 1;

        let name_start = i;
        while i < len && is_name_byte(bytes[i]) {
            i += 1;
        }
        let name = (name_start, i);

        let mut attributes = Vec::new();
        let mut self_closing = false;
        let interior_end;
        let end;

        loop {
            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= len {
                self.pos = len;
                return None;
            }
            if bytes[i] == b'>' {
                interior_end = i;
                end = i + 1;
                break;
            }
            if bytes[i] == b'/' && i + 1 < len && bytes[i + 1] == b'>' {
                self_closing = true;
                interior_end = i;
                end = i + 2;
                break;
            }

            let attr_start = i;
            while i < len && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'=' | b'>' | b'/') {
                i += 1;
            }
            if i == attr_start {
                // Stray '/' not followed by '>'.
                i += 1;
                continue;
            }
            let attr_name = (attr_start, i);

            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            let mut value = None;
            if i < len && bytes[i] == b'=' {
                i += 1;
                while i < len && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                if i < len && (bytes[i] == b'"' || bytes[i] == b'\'') {
                    let quote = bytes[i];
                    i += 1;
                    let value_start = i;
                    while i < len && bytes[i] != quote {
                        i += 1;
                    }
                    value = Some((value_start, i));
                    if i < len {
                        i += 1;
                    }
                } else {
                    let value_start = i;
                    while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                        i += 1;
                    }
                    value = Some((value_start, i));
                }
            }
            attributes.push(Attribute {
                name: attr_name,
                value,
            });
        }

        self.pos = end;
        Some(Tag {
            kind: TagKind::Open,
            start,
            end,
            name,
            interior_end,
            self_closing,
            attributes,
        })
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':')
}

/// Append class tokens to a tag, skipping any that are already present.
/// Adds a class attribute when the tag has none.
pub fn add_classes(html: &str, tag: &Tag, classes: &[&str]) -> String {
    let missing: Vec<&str> = classes
        .iter()
        .filter(|c| !c.is_empty() && !tag.class_contains(html, c))
        .copied()
        .collect();
    if missing.is_empty() {
        return html.to_string();
    }
    let joined = missing.join(" ");

    match tag.attribute_value_span(html, "class") {
        Some((_, value_end)) => {
            let sep = if html[..value_end].ends_with(char::is_whitespace)
                || tag.attribute(html, "class").is_some_and(|v| v.is_empty())
            {
                ""
            } else {
                " "
            };
            format!("{}{}{}{}", &html[..value_end], sep, joined, &html[value_end..])
        }
        None => format!(
            "{} class=\"{}\"{}",
            &html[..tag.interior_end].trim_end(),
            joined,
            &html[tag.interior_end..]
        ),
    }
}

/// Append inline-style declarations to a tag, preserving any existing inline
/// styles. Adds a style attribute when the tag has none.
pub fn append_style(html: &str, tag: &Tag, declarations: &str) -> String {
    if declarations.is_empty() {
        return html.to_string();
    }

    match tag.attribute_value_span(html, "style") {
        Some((value_start, value_end)) => {
            let existing = &html[value_start..value_end];
            let sep = if existing.is_empty() || existing.trim_end().ends_with(';') {
                ""
            } else {
                ";"
            };
            format!(
                "{}{}{}{}",
                &html[..value_end],
                sep,
                declarations,
                &html[value_end..]
            )
        }
        None => format!(
            "{} style=\"{}\"{}",
            &html[..tag.interior_end].trim_end(),
            declarations,
            &html[tag.interior_end..]
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn first_tag(html: &str) -> Tag {
        TagScanner::new(html).next_tag().expect("expected a tag")
    }

    #[test]
    fn scans_open_tag_with_attributes() {
        let html = r#"<li class="menu-item current" data-depth="2">x</li>"#;
        let tag = first_tag(html);
        assert_eq!(tag.kind, TagKind::Open);
        assert_eq!(tag.name(html), "li");
        assert_eq!(tag.attribute(html, "class"), Some("menu-item current"));
        assert_eq!(tag.attribute(html, "data-depth"), Some("2"));
        assert!(tag.class_contains(html, "current"));
        assert!(!tag.class_contains(html, "curr"));
    }

    #[test]
    fn scans_close_and_self_closing_tags() {
        let html = "<br/></li>";
        let mut scanner = TagScanner::new(html);
        let br = scanner.next_tag().unwrap();
        assert!(br.self_closing);
        let li = scanner.next_tag().unwrap();
        assert_eq!(li.kind, TagKind::Close);
        assert_eq!(li.name(html), "li");
    }

    #[test]
    fn skips_literal_angle_bracket_in_text() {
        let html = "<p>1 < 2</p>";
        let mut scanner = TagScanner::new(html);
        assert_eq!(scanner.next_tag().unwrap().name(html), "p");
        let close = scanner.next_tag().unwrap();
        assert_eq!(close.kind, TagKind::Close);
        assert!(scanner.next_tag().is_none());
    }

    #[test]
    fn yields_comments_and_doctype_as_markup() {
        let html = "<!-- note --><!DOCTYPE html><a href='#'>x</a>";
        let mut scanner = TagScanner::new(html);
        assert_eq!(scanner.next_tag().unwrap().kind, TagKind::Comment);
        assert_eq!(scanner.next_tag().unwrap().kind, TagKind::Markup);
        assert_eq!(scanner.next_tag().unwrap().name(html), "a");
    }

    #[test]
    fn unterminated_tag_is_ignored() {
        let html = "<a href=\"x";
        assert!(TagScanner::new(html).next_tag().is_none());
    }

    #[test]
    fn handles_single_quoted_and_unquoted_values() {
        let html = "<a href='/home' target=_blank rel>link</a>";
        let tag = first_tag(html);
        assert_eq!(tag.attribute(html, "href"), Some("/home"));
        assert_eq!(tag.attribute(html, "target"), Some("_blank"));
        assert_eq!(tag.attribute(html, "rel"), None);
    }

    #[test]
    fn handles_multibyte_text_between_tags() {
        let html = "<li>naïve — entry</li>";
        let mut scanner = TagScanner::new(html);
        assert_eq!(scanner.next_tag().unwrap().name(html), "li");
        assert_eq!(scanner.next_tag().unwrap().kind, TagKind::Close);
    }

    #[test]
    fn add_classes_appends_to_existing_attribute() {
        let html = r#"<li class="menu-item">x</li>"#;
        let tag = first_tag(html);
        let out = add_classes(html, &tag, &["has-icon__bolt", "menu-item"]);
        assert_eq!(out, r#"<li class="menu-item has-icon__bolt">x</li>"#);
    }

    #[test]
    fn add_classes_creates_attribute_when_missing() {
        let html = "<li>x</li>";
        let tag = first_tag(html);
        let out = add_classes(html, &tag, &["has-icon__bolt"]);
        assert_eq!(out, r#"<li class="has-icon__bolt">x</li>"#);
    }

    #[test]
    fn add_classes_is_noop_when_all_present() {
        let html = r#"<li class="a b">x</li>"#;
        let tag = first_tag(html);
        assert_eq!(add_classes(html, &tag, &["a", "b"]), html);
    }

    #[test]
    fn append_style_preserves_existing_declarations() {
        let html = r#"<a class="x" style="color:blue">y</a>"#;
        let tag = first_tag(html);
        let out = append_style(html, &tag, "--icon-size:24px");
        assert_eq!(out, r#"<a class="x" style="color:blue;--icon-size:24px">y</a>"#);
    }

    #[test]
    fn append_style_creates_attribute_when_missing() {
        let html = "<a href='#'>y</a>";
        let tag = first_tag(html);
        let out = append_style(html, &tag, "--icon-size:24px");
        assert_eq!(out, r#"<a href='#' style="--icon-size:24px">y</a>"#);
    }
}
