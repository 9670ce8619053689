//! Glaze UI
//!
//! The liquid-glass component, composed from `glaze_core` primitives:
//!
//! - **Element Tree**: a minimal host-agnostic renderable tree with ordered
//!   style and attribute maps, serializable to markup
//! - **LiquidGlass**: the component itself - a fixed stack of effect, tint,
//!   shine, and content layers over an emitted distortion-filter definition
//! - **Diff**: the render-skip comparison hosts use to avoid re-rendering
//!   unchanged instances
//!
//! # Example
//!
//! ```rust
//! use glaze_ui::{LiquidGlass, Node};
//!
//! let mut glass = LiquidGlass::new(Node::Text("Hello".to_string()))
//!     .filter_id("hero")
//!     .blur_amount(2.0);
//!
//! let tree = glass.render();
//! assert!(tree.to_html().contains("backdrop-filter"));
//! ```

pub mod diff;
pub mod element;
pub mod glass;
mod memo;

pub use diff::{diff, props_unchanged, Changes};
pub use element::{div, Element, Fragment, Node};
pub use glass::{
    backdrop_filter_value, content_style, effect_layer_style, outer_frame_style, render_glass,
    shell_style, shine_layer_style, tint_layer_style, GlassProps, LiquidGlass, Z_CONTENT, Z_EFFECT,
    Z_SHELL, Z_SHINE, Z_TINT,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::diff::{diff, props_unchanged, Changes};
    pub use crate::element::{div, Element, Fragment, Node};
    pub use crate::glass::{render_glass, GlassProps, LiquidGlass};
    // Re-export commonly needed core types
    pub use glaze_core::{GlassConfig, PartialGlassConfig, Radius, StyleMap};
}
