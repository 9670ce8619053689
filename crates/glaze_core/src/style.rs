//! Style property maps
//!
//! All layer styling in Glaze is expressed as ordered property/value maps.
//! The map preserves first-insertion order, which becomes emission order when
//! a map is serialized as inline CSS. Setting an existing property overwrites
//! its value in place without changing its position.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping from style property name to value text.
///
/// Values are opaque to Glaze: they pass through to the host rendering engine
/// unvalidated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    properties: IndexMap<String, String>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, overwriting any existing value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Look up a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// Whether a property is present.
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Number of properties in the map.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Apply `overrides` on top of this map.
    ///
    /// Colliding keys take the override value (keeping their original
    /// position); new keys are appended in the override map's order.
    pub fn merge(&mut self, overrides: &StyleMap) {
        for (property, value) in overrides.iter() {
            self.set(property, value);
        }
    }

    /// Builder-style [`merge`](Self::merge).
    pub fn merged(mut self, overrides: &StyleMap) -> Self {
        self.merge(overrides);
        self
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as inline CSS text: `prop: value; prop: value`.
    pub fn to_inline_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, value) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", property, value)?;
            first = false;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

// =============================================================================
// Radius
// =============================================================================

/// A border-radius value: bare pixels or an arbitrary expression.
///
/// Numeric radii render with a `px` suffix; expressions pass through as-is.
/// In JSON form both `24` and `"24px"` are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Radius {
    /// Radius in pixels.
    Px(f64),
    /// Any host-understood radius expression, e.g. `"50%"` or `"1em"`.
    Expr(String),
}

impl Radius {
    /// The rendered value, e.g. `"24px"` or `"50%"`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for Radius {
    fn default() -> Self {
        Radius::Px(24.0)
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display is shortest-roundtrip, so 24.0 renders as "24px".
            Radius::Px(px) => write!(f, "{}px", px),
            Radius::Expr(expr) => f.write_str(expr),
        }
    }
}

impl From<f64> for Radius {
    fn from(px: f64) -> Self {
        Radius::Px(px)
    }
}

impl From<f32> for Radius {
    fn from(px: f32) -> Self {
        Radius::Px(px as f64)
    }
}

impl From<&str> for Radius {
    fn from(expr: &str) -> Self {
        Radius::Expr(expr.to_string())
    }
}

impl From<String> for Radius {
    fn from(expr: String) -> Self {
        Radius::Expr(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_insertion_order() {
        let mut style = StyleMap::new();
        style.set("position", "absolute");
        style.set("inset", "0");
        style.set("z-index", "2");
        style.set("position", "relative");

        let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["position", "inset", "z-index"]);
        assert_eq!(style.get("position"), Some("relative"));
    }

    #[test]
    fn test_merge_overrides_win() {
        let mut base = StyleMap::new();
        base.set("background", "red");
        base.set("padding", "4px");

        let overrides = StyleMap::new()
            .with("background", "blue")
            .with("margin", "8px");
        base.merge(&overrides);

        assert_eq!(base.get("background"), Some("blue"));
        assert_eq!(base.get("padding"), Some("4px"));
        assert_eq!(base.get("margin"), Some("8px"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_inline_css() {
        let style = StyleMap::new()
            .with("position", "relative")
            .with("z-index", "4");

        assert_eq!(style.to_inline_css(), "position: relative; z-index: 4");
    }

    #[test]
    fn test_radius_display() {
        assert_eq!(Radius::Px(24.0).to_css(), "24px");
        assert_eq!(Radius::Px(2.5).to_css(), "2.5px");
        assert_eq!(Radius::from("50%").to_css(), "50%");
    }

    #[test]
    fn test_radius_untagged_json() {
        let px: Radius = serde_json::from_str("24").unwrap();
        let expr: Radius = serde_json::from_str("\"24px\"").unwrap();

        assert_eq!(px, Radius::Px(24.0));
        assert_eq!(expr, Radius::Expr("24px".to_string()));
    }
}
