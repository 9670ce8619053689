//! Per-descriptor memo slots
//!
//! Each style descriptor depends on a small subset of the configuration.
//! A slot stores the hash of that subset next to the cached value and only
//! recomputes when the hash moves. Purely an optimization: recomputing every
//! descriptor on every render produces identical output.

use std::hash::{Hash, Hasher};

use glaze_core::{Radius, StyleMap};
use rustc_hash::FxHasher;

/// Incremental hash over the fields a descriptor depends on.
pub(crate) struct DepKey {
    hasher: FxHasher,
}

impl DepKey {
    pub fn new() -> Self {
        Self {
            hasher: FxHasher::default(),
        }
    }

    pub fn text(mut self, value: &str) -> Self {
        value.hash(&mut self.hasher);
        self
    }

    pub fn number(mut self, value: f64) -> Self {
        value.to_bits().hash(&mut self.hasher);
        self
    }

    pub fn radius(mut self, value: &Radius) -> Self {
        match value {
            Radius::Px(px) => {
                0u8.hash(&mut self.hasher);
                px.to_bits().hash(&mut self.hasher);
            }
            Radius::Expr(expr) => {
                1u8.hash(&mut self.hasher);
                expr.hash(&mut self.hasher);
            }
        }
        self
    }

    pub fn style(mut self, map: &StyleMap) -> Self {
        map.len().hash(&mut self.hasher);
        for (property, value) in map.iter() {
            property.hash(&mut self.hasher);
            value.hash(&mut self.hasher);
        }
        self
    }

    pub fn finish(self) -> u64 {
        self.hasher.finish()
    }
}

/// One cached descriptor plus the key it was computed from.
pub(crate) struct MemoSlot<T> {
    key: Option<u64>,
    value: Option<T>,
    generation: u64,
}

impl<T: Clone> MemoSlot<T> {
    pub fn new() -> Self {
        Self {
            key: None,
            value: None,
            generation: 0,
        }
    }

    /// Return the cached value when `key` matches, recompute otherwise.
    pub fn get_or_compute(&mut self, key: u64, compute: impl FnOnce() -> T) -> T {
        if self.key == Some(key) {
            if let Some(value) = &self.value {
                return value.clone();
            }
        }
        let value = compute();
        self.key = Some(key);
        self.value = Some(value.clone());
        self.generation += 1;
        value
    }

    /// Number of times this slot has recomputed. Test hook.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_caches_per_key() {
        let mut slot = MemoSlot::new();

        let a = slot.get_or_compute(1, || "a".to_string());
        let b = slot.get_or_compute(1, || "b".to_string());
        assert_eq!(a, "a");
        assert_eq!(b, "a", "same key must return the cached value");
        assert_eq!(slot.generation(), 1);

        let c = slot.get_or_compute(2, || "c".to_string());
        assert_eq!(c, "c");
        assert_eq!(slot.generation(), 2);
    }

    #[test]
    fn test_dep_key_is_deterministic() {
        let key = |pad: &str| DepKey::new().text(pad).number(1.2).finish();

        assert_eq!(key("10px"), key("10px"));
        assert_ne!(key("10px"), key("12px"));
    }

    #[test]
    fn test_dep_key_separates_radius_forms() {
        let px = DepKey::new().radius(&Radius::Px(24.0)).finish();
        let expr = DepKey::new().radius(&Radius::Expr("24px".to_string())).finish();

        assert_ne!(px, expr);
    }
}
