//! Server render path.
//!
//! During one depth-first render pass over the page's block tree, a
//! [`RenderPass`] tracks the attributes of every currently-open navigation
//! container. The top of the stack is always the nearest enclosing container,
//! which is what gives nested containers (a mega menu holding a
//! sub-navigation, say) the right defaults. The stack is owned by the pass,
//! so state can never leak between requests: build a fresh `RenderPass` per
//! page render.

use tracing::{debug, trace};

use crate::attributes::{ContainerAttributes, ItemAttributes};
use crate::inject::inject_icon;
use crate::registry;
use crate::resolve::resolve;
use crate::sanitize::sanitize_svg;

/// Nesting tracker for one page render. Not shareable between concurrent
/// renders; each render pass owns its own.
#[derive(Debug, Default)]
pub struct RenderPass {
    stack: Vec<ContainerAttributes>,
}

impl RenderPass {
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigation container's render has begun: push its attributes.
    pub fn enter_container(&mut self, attrs: ContainerAttributes) {
        self.stack.push(attrs);
        trace!(depth = self.stack.len(), "entered navigation container");
    }

    /// A navigation container's render has finished: pop. Popping an empty
    /// stack is a no-op, not an error.
    pub fn leave_container(&mut self) {
        if self.stack.pop().is_none() {
            debug!("leave_container with no open container, ignoring");
        } else {
            trace!(depth = self.stack.len(), "left navigation container");
        }
    }

    /// Defaults of the nearest enclosing container, or an empty record when
    /// no container is open.
    pub fn current_defaults(&self) -> ContainerAttributes {
        self.stack.last().cloned().unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Rewrite one navigation item's rendered markup to carry its icon.
///
/// Pass-through when the item has no icon at all. The SVG source is the
/// item's raw `icon` markup when present, else the library icon named by
/// `icon_name`; either way it is sanitized before injection.
pub fn render_item(pass: &RenderPass, markup: &str, attrs: &ItemAttributes) -> String {
    if !attrs.has_icon() {
        return markup.to_string();
    }

    let defaults = pass.current_defaults();
    let settings = resolve(attrs, &defaults);

    let svg = attrs
        .icon
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| attrs.icon_name.as_deref().and_then(registry::lookup));
    let sanitized = svg.map(sanitize_svg).unwrap_or_default();

    let identifier = attrs
        .icon_name
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("custom");

    inject_icon(markup, &settings, &sanitized, identifier)
}
