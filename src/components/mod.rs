//! Component renderers and the registry that dispatches to them
//!
//! Every component is a unit type implementing [`Component`]. The registry
//! maps the closed set of [`ComponentKind`] names onto them; renderers only
//! consume the resolved tokens and the coercing [`crate::content::Props`] view.

mod cards;
mod data;
mod primitives;
pub mod registry;
mod shell;

pub use registry::{Component, ComponentKind, Registry, RenderContext, UnknownComponentError};
