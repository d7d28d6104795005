//! Editor preview path.
//!
//! The editor has no render-pass stack: the live block tree is walked on
//! every evaluation, and the nearest enclosing container falls out of the
//! ancestry along the way (the stack is implicit in the tree). The output is
//! the class list for the item's preview wrapper plus a CSS string for the
//! host's style-injection mechanism, both built from the same resolver and
//! style generator the server path uses.

use crate::attributes::{ContainerAttributes, ItemAttributes};
use crate::inject::ITEM_CONTENT_CLASS;
use crate::resolve::{resolve, EffectiveSettings};
use crate::sanitize::sanitize_class_token;
use crate::style::{generate_icon_css, IconStyle};

/// Class prefix identifying one item instance in the preview, so generated
/// CSS can be scoped to exactly that item.
pub const PREVIEW_CLASS_PREFIX: &str = "nav-item-has-icon-";

/// Minimal model of the live block tree the host editor exposes.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockNode {
    /// A navigation container carrying default icon settings.
    Container {
        attributes: ContainerAttributes,
        children: Vec<BlockNode>,
    },
    /// A navigation link / submenu / mega-menu item.
    Item {
        attributes: ItemAttributes,
        children: Vec<BlockNode>,
    },
    /// Any other block; only its children matter for ancestry.
    Other { children: Vec<BlockNode> },
}

impl BlockNode {
    pub fn children(&self) -> &[BlockNode] {
        match self {
            BlockNode::Container { children, .. }
            | BlockNode::Item { children, .. }
            | BlockNode::Other { children } => children,
        }
    }
}

/// Preview output for one item: wrapper classes plus scoped CSS.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPreview {
    pub classes: Vec<String>,
    pub css: String,
    pub settings: EffectiveSettings,
}

/// Unique preview wrapper class for one item instance.
pub fn instance_class(instance_id: u64) -> String {
    format!("{PREVIEW_CLASS_PREFIX}{instance_id}")
}

/// The selector the preview CSS is scoped to: the instance's content element
/// pseudo-elements, as a comma-separated pair.
pub fn preview_selector(instance_class: &str) -> String {
    format!(
        ".{ic} .{content}::before, .{ic} .{content}::after",
        ic = instance_class,
        content = ITEM_CONTENT_CLASS
    )
}

/// Build the preview for the item at `path` (child indices from the root).
///
/// Walks the tree along the path, remembering the nearest container passed
/// on the way down. Returns `None` when the path does not lead to an item
/// block or the item has no icon — in both cases the preview wrapper is
/// rendered unmodified.
pub fn item_preview(tree: &BlockNode, path: &[usize], instance_id: u64) -> Option<ItemPreview> {
    let mut node = tree;
    let mut nearest_container: Option<&ContainerAttributes> = None;

    for &index in path {
        if let BlockNode::Container { attributes, .. } = node {
            nearest_container = Some(attributes);
        }
        node = node.children().get(index)?;
    }

    let BlockNode::Item { attributes, .. } = node else {
        return None;
    };
    if !attributes.has_icon() {
        return None;
    }

    let defaults = nearest_container.cloned().unwrap_or_default();
    let settings = resolve(attributes, &defaults);

    let wrapper_class = instance_class(instance_id);
    let selector = preview_selector(&wrapper_class);
    let css = generate_icon_css(&IconStyle {
        selector: &selector,
        icon: attributes.icon.as_deref(),
        icon_name: attributes.icon_name.as_deref(),
        custom_icon_color: settings.inline_color(),
        icon_size: settings.icon_size(),
        icon_spacing: settings.icon_spacing(),
    });

    let mut classes = Vec::new();
    match attributes.icon_name.as_deref().filter(|s| !s.is_empty()) {
        Some(name) => classes.push(format!("has-icon__{}", sanitize_class_token(name))),
        None => classes.push("has-icon__custom".to_string()),
    }
    if settings.icon_position_left {
        classes.push("has-icon-position__left".to_string());
    }
    if settings.justify_space_between {
        classes.push("has-justified-space-between".to_string());
    }
    if settings.has_no_icon_fill {
        classes.push("has-no-icon-fill".to_string());
    }
    classes.push(wrapper_class);

    Some(ItemPreview {
        classes,
        css,
        settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(attrs: ItemAttributes) -> BlockNode {
        BlockNode::Item {
            attributes: attrs,
            children: Vec::new(),
        }
    }

    fn bolt_item() -> BlockNode {
        item(ItemAttributes {
            icon_name: Some("bolt".into()),
            ..Default::default()
        })
    }

    #[test]
    fn ancestry_walk_finds_nearest_container() {
        // Outer container (size 10px) > other block > inner container (20px) > item.
        let tree = BlockNode::Container {
            attributes: ContainerAttributes {
                default_icon_size: Some("10px".into()),
                ..Default::default()
            },
            children: vec![BlockNode::Other {
                children: vec![BlockNode::Container {
                    attributes: ContainerAttributes {
                        default_icon_size: Some("20px".into()),
                        ..Default::default()
                    },
                    children: vec![bolt_item()],
                }],
            }],
        };

        let preview = item_preview(&tree, &[0, 0, 0], 7).unwrap();
        assert_eq!(preview.settings.icon_size, "20px");
        assert!(preview.css.contains("width: 20px !important;"));
        assert!(preview.classes.contains(&"nav-item-has-icon-7".to_string()));
    }

    #[test]
    fn item_outside_any_container_uses_own_settings() {
        let tree = item(ItemAttributes {
            icon_name: Some("bolt".into()),
            icon_position_left: true,
            ..Default::default()
        });
        let preview = item_preview(&tree, &[], 1).unwrap();
        assert!(preview
            .classes
            .contains(&"has-icon-position__left".to_string()));
    }

    #[test]
    fn no_icon_means_no_preview() {
        let tree = item(ItemAttributes::default());
        assert_eq!(item_preview(&tree, &[], 1), None);
    }

    #[test]
    fn bad_path_means_no_preview() {
        let tree = bolt_item();
        assert_eq!(item_preview(&tree, &[3], 1), None);

        let container_only = BlockNode::Container {
            attributes: ContainerAttributes::default(),
            children: Vec::new(),
        };
        assert_eq!(item_preview(&container_only, &[], 1), None);
    }

    #[test]
    fn custom_icon_gets_custom_class() {
        let tree = item(ItemAttributes {
            icon: Some("<svg><path d=\"M0 0\"/></svg>".into()),
            ..Default::default()
        });
        let preview = item_preview(&tree, &[], 1).unwrap();
        assert!(preview.classes.contains(&"has-icon__custom".to_string()));
        assert!(preview.css.contains("mask-image"));
    }

    #[test]
    fn preview_selector_scopes_both_pseudo_elements() {
        let selector = preview_selector("nav-item-has-icon-3");
        assert_eq!(
            selector,
            ".nav-item-has-icon-3 .nav-item__content::before, .nav-item-has-icon-3 .nav-item__content::after"
        );
    }

    #[test]
    fn css_matches_server_resolution() {
        // Same inputs through resolver + generator as the server path uses.
        let tree = BlockNode::Container {
            attributes: ContainerAttributes {
                default_icon_spacing: Some("6px".into()),
                ..Default::default()
            },
            children: vec![bolt_item()],
        };
        let preview = item_preview(&tree, &[0], 2).unwrap();
        assert!(preview.css.contains("gap: 6px !important;"));
    }
}
