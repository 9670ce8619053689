//! SVG emission for Glaze
//!
//! Serializes a [`glaze_core::DistortionFilter`] into the hidden
//! `<svg><defs><filter>` block a glass instance mounts next to its layer
//! stack. Emission is pure string building; the host's SVG engine does the
//! actual filtering.
//!
//! # Example
//!
//! ```ignore
//! use glaze_core::DistortionFilter;
//! use glaze_svg::write_defs_svg;
//!
//! let filter = DistortionFilter::new("lg-dist", 8.0, -30.0);
//! let markup = write_defs_svg(&filter);
//! assert!(markup.contains("<feDisplacementMap"));
//! ```

mod markup;

pub use markup::{escape_attr, write_defs_svg, write_filter};
