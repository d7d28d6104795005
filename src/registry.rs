//! Built-in icon library.
//!
//! A small static table of navigation-flavored icons, addressed by the
//! `iconName` block attribute. Icons are plain SVG markup strings sized on a
//! 24x24 viewBox, recolorable via the mask-image technique.

/// Name -> SVG markup. Kept sorted by name.
const ICONS: &[(&str, &str)] = &[
    (
        "arrow-right",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true" focusable="false"><path d="M4 11h12.2l-4.6-4.6L13 5l7 7-7 7-1.4-1.4 4.6-4.6H4v-2z"/></svg>"#,
    ),
    (
        "bolt",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true" focusable="false"><path d="M13 2 4.8 13.4H11L10 22l8.2-11.4H12L13 2z"/></svg>"#,
    ),
    (
        "chevron-down",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true" focusable="false"><path d="M12 15.5 4.9 8.4l1.4-1.4 5.7 5.7 5.7-5.7 1.4 1.4L12 15.5z"/></svg>"#,
    ),
    (
        "external-link",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true" focusable="false"><path d="M18 18H6V6h5V4H6a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-5h-2v5zM13 4v2h3.6l-8.3 8.3 1.4 1.4L18 7.4V11h2V4h-7z"/></svg>"#,
    ),
    (
        "home",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true" focusable="false"><path d="M12 3 3 10.6V21h6.5v-6h5v6H21V10.6L12 3z"/></svg>"#,
    ),
    (
        "search",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true" focusable="false"><path d="M10.5 4a6.5 6.5 0 0 1 5.2 10.4l4.4 4.4-1.3 1.3-4.4-4.4A6.5 6.5 0 1 1 10.5 4zm0 2a4.5 4.5 0 1 0 0 9 4.5 4.5 0 0 0 0-9z"/></svg>"#,
    ),
    (
        "star",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" aria-hidden="true" focusable="false"><path d="m12 2.6 2.9 5.9 6.5.9-4.7 4.6 1.1 6.4L12 17.4l-5.8 3 1.1-6.4-4.7-4.6 6.5-.9L12 2.6z"/></svg>"#,
    ),
];

/// Resolve a library icon by name.
pub fn lookup(name: &str) -> Option<&'static str> {
    ICONS
        .binary_search_by_key(&name, |&(n, _)| n)
        .ok()
        .map(|i| ICONS[i].1)
}

/// Names of all built-in icons, for picker-style listings.
pub fn names() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|(n, _)| *n)
}
