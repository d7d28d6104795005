//! Effective-settings resolution.
//!
//! Merges an item's own icon attributes with the inherited defaults of its
//! nearest enclosing navigation container. Per field, in this exact order:
//!
//! 1. `use_default_icon_settings` is true AND the container default for the
//!    field is usable -> container default.
//! 2. Otherwise -> the item's own value (or the hardcoded default).
//!
//! "Usable" differs by type: boolean defaults apply whenever the container
//! attribute key is present at all (false is a legitimate default), string
//! defaults apply only when non-empty. Inverting this by accident is easy;
//! the tests below pin it down.

use crate::attributes::{ContainerAttributes, ItemAttributes};
use crate::sanitize::sanitize_class_token;

/// Fully resolved per-item icon configuration. Derived at render time,
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveSettings {
    pub icon_position_left: bool,
    pub justify_space_between: bool,
    pub has_no_icon_fill: bool,
    /// Empty string when unset.
    pub icon_size: String,
    /// Empty string when unset.
    pub icon_spacing: String,
    /// Empty string when unset. Only applied when no named color is set.
    pub custom_icon_color: String,
    /// Named theme color token; per-item only, never inherited.
    pub icon_color: Option<String>,
}

impl EffectiveSettings {
    /// Theme color class, e.g. `has-vivid-cyan-blue-color`.
    pub fn color_class(&self) -> Option<String> {
        self.icon_color
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| format!("has-{}-color", sanitize_class_token(c)))
    }

    /// The inline color value, unless a named theme color takes precedence.
    pub fn inline_color(&self) -> Option<&str> {
        if self.icon_color.as_deref().is_some_and(|c| !c.is_empty()) {
            return None;
        }
        Some(self.custom_icon_color.as_str()).filter(|c| !c.is_empty())
    }

    pub fn icon_size(&self) -> Option<&str> {
        Some(self.icon_size.as_str()).filter(|s| !s.is_empty())
    }

    pub fn icon_spacing(&self) -> Option<&str> {
        Some(self.icon_spacing.as_str()).filter(|s| !s.is_empty())
    }
}

/// Resolve the effective settings for one item under the given container
/// defaults. Pass `ContainerAttributes::default()` when no container
/// encloses the item.
pub fn resolve(item: &ItemAttributes, defaults: &ContainerAttributes) -> EffectiveSettings {
    let use_defaults = item.use_default_icon_settings;

    EffectiveSettings {
        icon_position_left: inherit_bool(
            use_defaults,
            defaults.default_icon_position_left,
            item.icon_position_left,
        ),
        justify_space_between: inherit_bool(
            use_defaults,
            defaults.default_justify_space_between,
            item.justify_space_between,
        ),
        has_no_icon_fill: inherit_bool(
            use_defaults,
            defaults.default_has_no_icon_fill,
            item.has_no_icon_fill,
        ),
        icon_size: inherit_string(use_defaults, &defaults.default_icon_size, &item.icon_size),
        icon_spacing: inherit_string(
            use_defaults,
            &defaults.default_icon_spacing,
            &item.icon_spacing,
        ),
        custom_icon_color: inherit_string(
            use_defaults,
            &defaults.default_custom_icon_color,
            &item.custom_icon_color,
        ),
        icon_color: item.icon_color.clone(),
    }
}

/// Booleans inherit on key presence: a container that stores `false`
/// still overrides the item.
fn inherit_bool(use_defaults: bool, default: Option<bool>, own: bool) -> bool {
    match default {
        Some(value) if use_defaults => value,
        _ => own,
    }
}

/// Strings inherit only when the container default is non-empty.
fn inherit_string(use_defaults: bool, default: &Option<String>, own: &Option<String>) -> String {
    match default.as_deref() {
        Some(value) if use_defaults && !value.is_empty() => value.to_string(),
        _ => own.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item() -> ItemAttributes {
        ItemAttributes::default()
    }

    #[test]
    fn no_container_falls_through_to_item() {
        let attrs = ItemAttributes {
            icon_position_left: true,
            icon_size: Some("20px".into()),
            ..item()
        };
        let settings = resolve(&attrs, &ContainerAttributes::default());
        assert!(settings.icon_position_left);
        assert_eq!(settings.icon_size, "20px");
    }

    #[test]
    fn container_false_boolean_overrides_item_true() {
        // Boolean inheritance keys off presence, not truthiness.
        let attrs = ItemAttributes {
            icon_position_left: true,
            ..item()
        };
        let defaults = ContainerAttributes {
            default_icon_position_left: Some(false),
            ..Default::default()
        };
        assert!(!resolve(&attrs, &defaults).icon_position_left);
    }

    #[test]
    fn container_true_boolean_overrides_item_false() {
        let defaults = ContainerAttributes {
            default_justify_space_between: Some(true),
            ..Default::default()
        };
        assert!(resolve(&item(), &defaults).justify_space_between);
    }

    #[test]
    fn empty_container_string_falls_through_to_item() {
        let attrs = ItemAttributes {
            icon_size: Some("18px".into()),
            ..item()
        };
        let defaults = ContainerAttributes {
            default_icon_size: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(resolve(&attrs, &defaults).icon_size, "18px");
    }

    #[test]
    fn non_empty_container_string_wins() {
        let attrs = ItemAttributes {
            icon_spacing: Some("4px".into()),
            ..item()
        };
        let defaults = ContainerAttributes {
            default_icon_spacing: Some("12px".into()),
            ..Default::default()
        };
        assert_eq!(resolve(&attrs, &defaults).icon_spacing, "12px");
    }

    #[test]
    fn opt_out_disables_all_inheritance() {
        let attrs = ItemAttributes {
            icon_position_left: true,
            icon_size: Some("18px".into()),
            use_default_icon_settings: false,
            ..item()
        };
        let defaults = ContainerAttributes {
            default_icon_position_left: Some(false),
            default_icon_size: Some("24px".into()),
            ..Default::default()
        };
        let settings = resolve(&attrs, &defaults);
        assert!(settings.icon_position_left);
        assert_eq!(settings.icon_size, "18px");
    }

    #[test]
    fn named_color_suppresses_inline_color() {
        let attrs = ItemAttributes {
            icon_color: Some("vivid-cyan-blue".into()),
            custom_icon_color: Some("#ff0000".into()),
            ..item()
        };
        let settings = resolve(&attrs, &ContainerAttributes::default());
        assert_eq!(
            settings.color_class().as_deref(),
            Some("has-vivid-cyan-blue-color")
        );
        assert_eq!(settings.inline_color(), None);
    }

    #[test]
    fn named_color_is_never_inherited() {
        let defaults = ContainerAttributes {
            default_icon_color: Some("accent".into()),
            default_custom_icon_color: Some("#00ff00".into()),
            ..Default::default()
        };
        let settings = resolve(&item(), &defaults);
        assert_eq!(settings.icon_color, None);
        // The custom-color path does inherit.
        assert_eq!(settings.inline_color(), Some("#00ff00"));
    }
}
