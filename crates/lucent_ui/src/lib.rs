//! Lucent UI
//!
//! A declarative node-tree surface over the theming engine. Hosts compose
//! UI trees with chained builder calls instead of markup:
//!
//! ```rust
//! use lucent_ui::{body, card, button, text};
//!
//! let tree = body()
//!     .child(card().child(text("Welcome")).child(button("Get started")))
//!     .prop("role", "main");
//! assert_eq!(tree.children.len(), 1);
//! ```
//!
//! A [`Renderer`] maps node kinds to component constructors and walks the
//! tree into a themed element arena. Unknown kinds are skipped with a
//! diagnostic - siblings keep rendering.

pub mod node;
pub mod renderer;

pub use node::{body, button, card, grid, navbar, text, Node, NodeKind};
pub use renderer::{Element, ElementId, RenderReport, Renderer};
