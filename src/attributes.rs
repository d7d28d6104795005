use serde::{Deserialize, Serialize};

use crate::error::IconResult;

/// Per-item icon attributes, as stored on a navigation link, submenu, or
/// mega-menu block by the host editor.
///
/// Field names mirror the block-attribute schema (camelCase JSON keys).
/// String fields are absent unless the author set them; the three display
/// booleans default to `false` and `useDefaultIconSettings` defaults to
/// `true`, matching the block registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemAttributes {
    /// Raw SVG markup (custom icon, media library upload).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Name of a library icon. Mutually informative with `icon`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    /// Named theme color token. Rendered as a color class, never inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    /// Arbitrary color value. Rendered inline, only when no named color is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_icon_color: Option<String>,
    /// CSS length string, e.g. "24px".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<String>,
    /// CSS length string for the gap between icon and label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_spacing: Option<String>,
    pub icon_position_left: bool,
    pub justify_space_between: bool,
    pub has_no_icon_fill: bool,
    /// When true (the default), each setting independently falls back to the
    /// enclosing container's `default*` attribute where one is present.
    pub use_default_icon_settings: bool,
}

impl Default for ItemAttributes {
    fn default() -> Self {
        Self {
            icon: None,
            icon_name: None,
            icon_color: None,
            custom_icon_color: None,
            icon_size: None,
            icon_spacing: None,
            icon_position_left: false,
            justify_space_between: false,
            has_no_icon_fill: false,
            use_default_icon_settings: true,
        }
    }
}

impl ItemAttributes {
    /// Deserialize from a raw block-attribute JSON object.
    pub fn from_json(value: serde_json::Value) -> IconResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// True when the item carries any icon at all. Items without an icon are
    /// rendered completely untouched.
    pub fn has_icon(&self) -> bool {
        self.icon.as_deref().is_some_and(|s| !s.is_empty())
            || self.icon_name.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Default icon settings declared on a navigation container block and
/// inherited by its descendant items.
///
/// Boolean defaults are `Option<bool>`: inheritance keys off attribute
/// *presence*, so a container that explicitly stores `false` still overrides
/// an item's own `true`. String defaults inherit only when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_icon_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_icon_spacing: Option<String>,
    /// Stored by the settings panel but not consulted during resolution:
    /// named theme colors are a per-item choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_custom_icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_icon_position_left: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_justify_space_between: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_has_no_icon_fill: Option<bool>,
}

impl ContainerAttributes {
    /// Deserialize from a raw block-attribute JSON object.
    pub fn from_json(value: serde_json::Value) -> IconResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
