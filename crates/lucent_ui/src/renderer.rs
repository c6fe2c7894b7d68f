//! Node tree rendering
//!
//! Maps node kinds to component constructors and walks a declarative tree
//! into a themed element arena. An unregistered kind is skipped with a
//! `tracing::warn!` diagnostic and counted; its siblings still render.

use crate::node::Node;
use lucent_core::{Color, Shadow};
use lucent_theme::ResolvedTheme;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct ElementId;
}

/// A rendered element: resolved visual props plus child links
#[derive(Clone, Debug, Default)]
pub struct Element {
    pub kind: String,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub shadow: Option<Shadow>,
    pub padding: f32,
    pub gap: f32,
    pub label: Option<String>,
    pub children: Vec<ElementId>,
}

/// Builds one element's visual props from its node and the active theme
pub type ComponentFn = fn(&Node, &ResolvedTheme) -> Element;

/// Result of rendering a tree
pub struct RenderReport {
    pub elements: SlotMap<ElementId, Element>,
    pub root: Option<ElementId>,
    /// Number of nodes dropped for lacking a registered component
    pub skipped: usize,
}

impl RenderReport {
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }
}

/// Maps kind names to component constructors
pub struct Renderer {
    components: FxHashMap<String, ComponentFn>,
}

impl Renderer {
    /// Renderer with no components registered
    pub fn empty() -> Self {
        Self {
            components: FxHashMap::default(),
        }
    }

    /// Renderer with the built-in component set
    pub fn with_builtins() -> Self {
        let mut renderer = Self::empty();
        renderer.register("body", components::body);
        renderer.register("card", components::card);
        renderer.register("button", components::button);
        renderer.register("navbar", components::navbar);
        renderer.register("grid", components::grid);
        renderer.register("text", components::text);
        renderer
    }

    /// Register (or replace) a component for a kind name
    pub fn register(&mut self, kind: impl Into<String>, component: ComponentFn) {
        self.components.insert(kind.into(), component);
    }

    /// Render a tree against the active theme
    pub fn render(&self, tree: &Node, theme: &ResolvedTheme) -> RenderReport {
        let mut report = RenderReport {
            elements: SlotMap::with_key(),
            root: None,
            skipped: 0,
        };
        report.root = self.render_node(tree, theme, &mut report.elements, &mut report.skipped);
        report
    }

    fn render_node(
        &self,
        node: &Node,
        theme: &ResolvedTheme,
        elements: &mut SlotMap<ElementId, Element>,
        skipped: &mut usize,
    ) -> Option<ElementId> {
        let Some(component) = self.components.get(node.kind.name()) else {
            tracing::warn!(kind = node.kind.name(), "unknown node kind, skipping");
            *skipped += 1;
            return None;
        };
        let mut element = component(node, theme);
        element.children = node
            .children
            .iter()
            .filter_map(|child| self.render_node(child, theme, elements, skipped))
            .collect();
        Some(elements.insert(element))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Built-in components, each reading only resolved tokens
mod components {
    use super::Element;
    use crate::node::Node;
    use lucent_theme::ResolvedTheme;

    pub fn body(_node: &Node, theme: &ResolvedTheme) -> Element {
        Element {
            kind: "body".to_string(),
            background: Some(theme.colors.background),
            text_color: Some(theme.colors.text),
            padding: theme.spacing.md,
            ..Element::default()
        }
    }

    pub fn card(_node: &Node, theme: &ResolvedTheme) -> Element {
        Element {
            kind: "card".to_string(),
            background: Some(theme.colors.surface),
            text_color: Some(theme.colors.text),
            shadow: Some(theme.effects.shadow),
            padding: theme.spacing.lg,
            ..Element::default()
        }
    }

    pub fn button(node: &Node, theme: &ResolvedTheme) -> Element {
        Element {
            kind: "button".to_string(),
            background: Some(theme.colors.primary),
            text_color: Some(theme.colors.surface),
            padding: theme.spacing.sm,
            label: node.get_prop("label").map(str::to_string),
            ..Element::default()
        }
    }

    pub fn navbar(_node: &Node, theme: &ResolvedTheme) -> Element {
        Element {
            kind: "navbar".to_string(),
            background: Some(theme.colors.surface),
            text_color: Some(theme.colors.text),
            shadow: Some(theme.effects.shadow),
            padding: theme.spacing.sm,
            ..Element::default()
        }
    }

    pub fn grid(_node: &Node, theme: &ResolvedTheme) -> Element {
        Element {
            kind: "grid".to_string(),
            padding: theme.spacing.md,
            gap: theme.spacing.sm,
            ..Element::default()
        }
    }

    pub fn text(node: &Node, theme: &ResolvedTheme) -> Element {
        Element {
            kind: "text".to_string(),
            text_color: Some(theme.colors.text),
            label: node.get_prop("content").map(str::to_string),
            ..Element::default()
        }
    }
}
