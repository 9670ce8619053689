//! Glass configuration
//!
//! [`GlassConfig`] is the immutable record one render pass works from. Every
//! field has a documented default and none of them are validated: whatever the
//! caller supplies flows through to the host rendering engine as-is. The only
//! hazard worth knowing about is `filter_id` - two mounted instances sharing
//! one id share one filter definition, and the later definition wins.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::Radius;

/// Errors from loading a configuration record.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error when reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or unknown-field JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for one glass instance.
///
/// Constructed via [`Default`] plus the consuming setters, via a preset, or
/// deserialized from JSON. Resolution of partially-specified configurations
/// goes through [`PartialGlassConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct GlassConfig {
    /// Id of the emitted distortion filter. Must be unique among instances
    /// mounted into the same document.
    pub filter_id: String,
    /// Inner padding of the content frame (opaque layout hint).
    pub padding: String,
    /// Corner rounding applied to every layer.
    pub border_radius: Radius,
    /// Tint fill drawn over the distorted backdrop (any color expression).
    pub tint_color: String,
    /// Distortion strength; negative values read as concave glass.
    pub displacement_scale: f64,
    /// Backdrop blur radius in pixels.
    pub blur_amount: f64,
    /// Backdrop saturation multiplier (1.0 = unchanged).
    pub saturation: f64,
    /// Softness of the displacement field: the blur std-deviation applied to
    /// the noise before it displaces the backdrop.
    pub elasticity: f64,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            filter_id: "lg-dist".to_string(),
            padding: "10px 20px".to_string(),
            border_radius: Radius::Px(24.0),
            tint_color: "rgba(0, 0, 0, 0.04)".to_string(),
            displacement_scale: -30.0,
            blur_amount: 0.0,
            saturation: 1.2,
            elasticity: 8.0,
        }
    }
}

impl GlassConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter id.
    pub fn filter_id(mut self, id: impl Into<String>) -> Self {
        self.filter_id = id.into();
        self
    }

    /// Set the inner padding.
    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the corner radius.
    pub fn border_radius(mut self, radius: impl Into<Radius>) -> Self {
        self.border_radius = radius.into();
        self
    }

    /// Set the tint color.
    pub fn tint_color(mut self, color: impl Into<String>) -> Self {
        self.tint_color = color.into();
        self
    }

    /// Set the displacement scale.
    pub fn displacement_scale(mut self, scale: f64) -> Self {
        self.displacement_scale = scale;
        self
    }

    /// Set the backdrop blur radius.
    pub fn blur_amount(mut self, blur: f64) -> Self {
        self.blur_amount = blur;
        self
    }

    /// Set the backdrop saturation.
    pub fn saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set the elasticity.
    pub fn elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = elasticity;
        self
    }

    // Presets

    /// Barely-there glass for dense UI surfaces.
    pub fn subtle() -> Self {
        Self::new()
            .blur_amount(2.0)
            .saturation(1.05)
            .displacement_scale(-12.0)
            .elasticity(6.0)
            .tint_color("rgba(255, 255, 255, 0.06)")
    }

    /// The default look.
    pub fn regular() -> Self {
        Self::new()
    }

    /// Milky frosted glass with a heavier blur and brighter tint.
    pub fn frosted() -> Self {
        Self::new()
            .blur_amount(10.0)
            .saturation(1.4)
            .displacement_scale(-18.0)
            .tint_color("rgba(255, 255, 255, 0.12)")
    }

    /// Strongly refracting glass for hero surfaces.
    pub fn deep() -> Self {
        Self::new()
            .blur_amount(4.0)
            .saturation(1.3)
            .displacement_scale(-60.0)
            .elasticity(12.0)
    }

    /// Load a configuration from a JSON string.
    ///
    /// Missing fields take their defaults; unknown fields are an error so
    /// host-config typos surface instead of silently doing nothing.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize the configuration as JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A configuration with every field optional.
///
/// Unset fields resolve to the [`GlassConfig`] defaults. Resolving the
/// partial form of an already-complete configuration returns it unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct PartialGlassConfig {
    /// See [`GlassConfig::filter_id`].
    pub filter_id: Option<String>,
    /// See [`GlassConfig::padding`].
    pub padding: Option<String>,
    /// See [`GlassConfig::border_radius`].
    pub border_radius: Option<Radius>,
    /// See [`GlassConfig::tint_color`].
    pub tint_color: Option<String>,
    /// See [`GlassConfig::displacement_scale`].
    pub displacement_scale: Option<f64>,
    /// See [`GlassConfig::blur_amount`].
    pub blur_amount: Option<f64>,
    /// See [`GlassConfig::saturation`].
    pub saturation: Option<f64>,
    /// See [`GlassConfig::elasticity`].
    pub elasticity: Option<f64>,
}

impl PartialGlassConfig {
    /// Resolve against the documented defaults.
    pub fn resolve(self) -> GlassConfig {
        self.resolve_over(GlassConfig::default())
    }

    /// Resolve against an explicit base configuration.
    pub fn resolve_over(self, base: GlassConfig) -> GlassConfig {
        GlassConfig {
            filter_id: self.filter_id.unwrap_or(base.filter_id),
            padding: self.padding.unwrap_or(base.padding),
            border_radius: self.border_radius.unwrap_or(base.border_radius),
            tint_color: self.tint_color.unwrap_or(base.tint_color),
            displacement_scale: self.displacement_scale.unwrap_or(base.displacement_scale),
            blur_amount: self.blur_amount.unwrap_or(base.blur_amount),
            saturation: self.saturation.unwrap_or(base.saturation),
            elasticity: self.elasticity.unwrap_or(base.elasticity),
        }
    }
}

impl From<GlassConfig> for PartialGlassConfig {
    fn from(config: GlassConfig) -> Self {
        Self {
            filter_id: Some(config.filter_id),
            padding: Some(config.padding),
            border_radius: Some(config.border_radius),
            tint_color: Some(config.tint_color),
            displacement_scale: Some(config.displacement_scale),
            blur_amount: Some(config.blur_amount),
            saturation: Some(config.saturation),
            elasticity: Some(config.elasticity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let config = GlassConfig::default();

        assert_eq!(config.filter_id, "lg-dist");
        assert_eq!(config.padding, "10px 20px");
        assert_eq!(config.border_radius.to_css(), "24px");
        assert_eq!(config.tint_color, "rgba(0, 0, 0, 0.04)");
        assert_eq!(config.displacement_scale, -30.0);
        assert_eq!(config.blur_amount, 0.0);
        assert_eq!(config.saturation, 1.2);
        assert_eq!(config.elasticity, 8.0);
    }

    #[test]
    fn test_builder_setters() {
        let config = GlassConfig::new()
            .filter_id("hero-glass")
            .blur_amount(6.0)
            .border_radius(12.0);

        assert_eq!(config.filter_id, "hero-glass");
        assert_eq!(config.blur_amount, 6.0);
        assert_eq!(config.border_radius, Radius::Px(12.0));
        // Untouched fields keep their defaults.
        assert_eq!(config.saturation, 1.2);
    }

    #[test]
    fn test_empty_partial_resolves_to_defaults() {
        let resolved = PartialGlassConfig::default().resolve();
        assert_eq!(resolved, GlassConfig::default());
    }

    #[test]
    fn test_resolve_is_idempotent_for_complete_configs() {
        let full = GlassConfig::frosted().filter_id("panel");
        let resolved = PartialGlassConfig::from(full.clone()).resolve();

        assert_eq!(resolved, full);
    }

    #[test]
    fn test_partial_fields_override_base() {
        let partial = PartialGlassConfig {
            saturation: Some(2.0),
            ..Default::default()
        };
        let resolved = partial.resolve_over(GlassConfig::deep());

        assert_eq!(resolved.saturation, 2.0);
        assert_eq!(resolved.displacement_scale, -60.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GlassConfig::subtle().filter_id("sidebar");
        let json = config.to_json().unwrap();
        let back = GlassConfig::from_json(&json).unwrap();

        assert_eq!(back, config);
    }

    #[test]
    fn test_json_missing_fields_take_defaults() {
        let config = GlassConfig::from_json(r#"{ "blurAmount": 3.5 }"#).unwrap();

        assert_eq!(config.blur_amount, 3.5);
        assert_eq!(config.filter_id, "lg-dist");
        assert_eq!(config.elasticity, 8.0);
    }

    #[test]
    fn test_json_numeric_and_string_radius() {
        let numeric = GlassConfig::from_json(r#"{ "borderRadius": 16 }"#).unwrap();
        let string = GlassConfig::from_json(r#"{ "borderRadius": "50%" }"#).unwrap();

        assert_eq!(numeric.border_radius.to_css(), "16px");
        assert_eq!(string.border_radius.to_css(), "50%");
    }

    #[test]
    fn test_json_unknown_field_is_rejected() {
        let result = GlassConfig::from_json(r#"{ "blurAmont": 3.5 }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_presets_differ_from_default() {
        assert_ne!(GlassConfig::subtle(), GlassConfig::default());
        assert_ne!(GlassConfig::frosted(), GlassConfig::default());
        assert_ne!(GlassConfig::deep(), GlassConfig::default());
        assert_eq!(GlassConfig::regular(), GlassConfig::default());
    }
}
