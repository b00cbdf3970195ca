//! Effective weight resolution.
//!
//! An entity's effective weight is its base weight multiplied by one
//! multiplier per applicable affinity map. A map that does not mention the
//! entity contributes [`DEFAULT_AFFINITY`].

use hs_core::{AffinityMap, Background, ClassInfo, Race};

pub use hs_core::DEFAULT_AFFINITY;

/// A table entry that can be drawn by weight.
pub trait Weighted {
    /// The name affinity maps use to refer to this entry.
    fn key(&self) -> &str;
    /// Weight before any affinity is applied.
    fn base_weight(&self) -> f64;
}

impl Weighted for Race {
    fn key(&self) -> &str {
        &self.name
    }
    fn base_weight(&self) -> f64 {
        self.weight
    }
}

impl Weighted for ClassInfo {
    fn key(&self) -> &str {
        &self.name
    }
    fn base_weight(&self) -> f64 {
        self.weight
    }
}

impl Weighted for Background {
    fn key(&self) -> &str {
        &self.name
    }
    fn base_weight(&self) -> f64 {
        self.weight
    }
}

/// Skills carry no weight of their own; every skill starts at 1.
impl Weighted for String {
    fn key(&self) -> &str {
        self
    }
    fn base_weight(&self) -> f64 {
        1.0
    }
}

/// The multiplier `map` assigns to `key`, or [`DEFAULT_AFFINITY`].
pub fn affinity_for(map: &AffinityMap, key: &str) -> f64 {
    map.get(key).copied().unwrap_or(DEFAULT_AFFINITY)
}

/// Effective weights of `items` under every map in `maps`.
///
/// `result[i] = items[i].base_weight() * Π affinity_for(map, items[i].key())`.
/// With no maps this is just the base weights.
pub fn resolve_weights<T: Weighted>(items: &[T], maps: &[&AffinityMap]) -> Vec<f64> {
    items
        .iter()
        .map(|item| {
            maps.iter()
                .fold(item.base_weight(), |w, map| w * affinity_for(map, item.key()))
        })
        .collect()
}

/// Effective weights of `items` when each item carries its own affinity
/// map and the drawn entity is `target`.
///
/// Used for backgrounds, whose maps are keyed by class name.
pub fn resolve_toward<T, F>(items: &[T], target: &str, affinities: F) -> Vec<f64>
where
    T: Weighted,
    F: Fn(&T) -> &AffinityMap,
{
    items
        .iter()
        .map(|item| item.base_weight() * affinity_for(affinities(item), target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn map(entries: &[(&str, f64)]) -> AffinityMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect()
    }

    #[test]
    fn missing_key_uses_default() {
        let m = map(&[("Arcana", 2.0)]);
        assert_eq!(affinity_for(&m, "Arcana"), 2.0);
        assert_eq!(affinity_for(&m, "Stealth"), DEFAULT_AFFINITY);
    }

    #[test]
    fn no_maps_yields_base_weights() {
        let items = skills(&["Arcana", "Stealth"]);
        assert_eq!(resolve_weights(&items, &[]), vec![1.0, 1.0]);
    }

    #[test]
    fn maps_multiply() {
        let items = skills(&["Arcana", "Stealth", "History"]);
        let race = map(&[("Arcana", 1.5), ("Stealth", 2.0)]);
        let class = map(&[("Arcana", 4.0)]);
        assert_eq!(resolve_weights(&items, &[&race, &class]), vec![6.0, 2.0, 1.0]);
    }

    #[test]
    fn toward_looks_up_target_in_each_items_map() {
        let soldier = Background {
            name: "Soldier".to_string(),
            weight: 2.0,
            class_affinities: map(&[("Fighter", 3.0)]),
            skill_affinities: AffinityMap::new(),
            personality_traits: vec![],
            flaws: vec![],
            motivations: vec![],
            notable_events: vec![],
        };
        let sage = Background {
            name: "Sage".to_string(),
            weight: 1.0,
            class_affinities: map(&[("Wizard", 5.0)]),
            ..soldier.clone()
        };
        let items = [soldier, sage];
        let weights = resolve_toward(&items, "Fighter", |b| &b.class_affinities);
        assert_eq!(weights, vec![6.0, 1.0]);
        let weights = resolve_toward(&items, "Wizard", |b| &b.class_affinities);
        assert_eq!(weights, vec![2.0, 5.0]);
    }

    proptest! {
        #[test]
        fn map_order_does_not_matter(
            a in prop::collection::vec(0.1f64..10.0, 4),
            b in prop::collection::vec(0.1f64..10.0, 4),
            c in prop::collection::vec(0.1f64..10.0, 4),
        ) {
            let items = skills(&["w", "x", "y", "z"]);
            let to_map = |values: &[f64]| -> AffinityMap {
                items.iter().cloned().zip(values.iter().copied()).collect()
            };
            let (a, b, c) = (to_map(&a), to_map(&b), to_map(&c));
            let abc = resolve_weights(&items, &[&a, &b, &c]);
            let cab = resolve_weights(&items, &[&c, &a, &b]);
            let bca = resolve_weights(&items, &[&b, &c, &a]);
            for ((x, y), z) in abc.iter().zip(&cab).zip(&bca) {
                prop_assert!((x - y).abs() <= 1e-9 * x);
                prop_assert!((x - z).abs() <= 1e-9 * x);
            }
        }
    }
}
