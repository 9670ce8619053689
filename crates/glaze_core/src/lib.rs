//! Glaze Core
//!
//! Foundational primitives for the Glaze liquid-glass component:
//!
//! - **Style Maps**: ordered property/value maps with merge precedence and
//!   inline-CSS serialization
//! - **Glass Configuration**: the immutable per-render configuration record,
//!   with documented defaults, presets, and partial-config resolution
//! - **Distortion Filter**: the typed four-stage filter chain (noise, blur,
//!   arithmetic composite, displacement) that gives the glass its refraction
//!
//! # Example
//!
//! ```rust
//! use glaze_core::{DistortionFilter, GlassConfig};
//!
//! let config = GlassConfig::default().blur_amount(4.0).saturation(1.4);
//! let filter = DistortionFilter::from_config(&config);
//!
//! assert_eq!(filter.stages.len(), 4);
//! ```

pub mod config;
pub mod filter;
pub mod style;

pub use config::{ConfigError, GlassConfig, PartialGlassConfig};
pub use filter::{
    ChannelSelector, CompositeOperator, DistortionFilter, FilterInput, FilterStage, TurbulenceKind,
    NOISE_BASE_FREQUENCY,
};
pub use style::{Radius, StyleMap};
