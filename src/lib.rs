//! # Navigation Icons Engine
//!
//! Core engine for attaching icons to the items of a block-based navigation
//! menu: per-item settings resolved against inherited container defaults,
//! scoped CSS generation (mask-image technique), and markup-level injection
//! of the icon into each item's rendered output.
//!
//! ## Paths
//! - **Server**: the host's recursive block renderer drives a [`RenderPass`]
//!   (push on container enter, pop on exit) and runs every navigation item's
//!   markup through [`render_item`].
//! - **Editor**: [`item_preview`] walks the live block tree's ancestry
//!   instead of a stack and returns wrapper classes plus CSS for the host's
//!   style-injection mechanism.
//!
//! Both paths share one resolver and one style generator, so they cannot
//! drift apart.
//!
//! ## Example
//! ```
//! use nav_icons::{ContainerAttributes, ItemAttributes, RenderPass, render_item};
//!
//! let mut pass = RenderPass::new();
//! pass.enter_container(ContainerAttributes {
//!     default_icon_position_left: Some(true),
//!     ..Default::default()
//! });
//!
//! let attrs = ItemAttributes {
//!     icon_name: Some("bolt".to_string()),
//!     ..Default::default()
//! };
//! let markup = r#"<li><a class="nav-item__content" href="/">Home</a></li>"#;
//! let rendered = render_item(&pass, markup, &attrs);
//! assert!(rendered.contains("has-icon__bolt"));
//!
//! pass.leave_container();
//! ```
//!
//! Failure handling is silent degradation throughout: unsanitizable icons,
//! unknown icon names, and unexpected markup all render best-effort rather
//! than erroring out of the page.

pub mod attributes;
pub mod editor;
pub mod error;
pub mod inject;
pub mod registry;
pub mod resolve;
pub mod sanitize;
pub mod scanner;
pub mod server;
pub mod style;

// --- Core types ---
pub use attributes::{ContainerAttributes, ItemAttributes};
pub use error::{IconError, IconResult};
pub use resolve::{resolve, EffectiveSettings};

// --- Server path ---
pub use server::{render_item, RenderPass};

// --- Editor path ---
pub use editor::{instance_class, item_preview, preview_selector, BlockNode, ItemPreview};

// --- Building blocks ---
pub use inject::{inject_icon, ICON_WRAPPER_CLASS, ITEM_CONTENT_CLASS};
pub use sanitize::sanitize_svg;
pub use style::{generate_icon_css, IconStyle};
