use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::config::WorldConfig;
use crate::error::{ForgeError, Result};

/// Compute a total order over worlds such that every world appears
/// after all worlds it inherits from.
///
/// Layered topological sort: worlds without inheritance seed the order,
/// then batches of worlds whose dependencies are all already placed are
/// appended until nothing is left. Within a batch, worlds are taken in
/// lexicographic order so a run is fully reproducible.
pub fn world_order(worlds: &BTreeMap<String, WorldConfig>) -> Result<Vec<String>> {
    let mut order = Vec::with_capacity(worlds.len());
    let mut placed: HashSet<&str> = HashSet::with_capacity(worlds.len());
    let mut remaining: BTreeSet<&str> = BTreeSet::new();

    for (name, config) in worlds {
        if config.inheritance.is_empty() {
            order.push(name.clone());
            placed.insert(name);
        } else {
            remaining.insert(name);
        }
    }

    while !remaining.is_empty() {
        let ready: Vec<&str> = remaining
            .iter()
            .filter(|name| {
                worlds[**name]
                    .inheritance
                    .iter()
                    .all(|dep| placed.contains(dep.as_str()))
            })
            .copied()
            .collect();

        // Leftover worlds form a cycle or reference an undeclared world.
        if ready.is_empty() {
            return Err(ForgeError::UnresolvableInheritance {
                worlds: remaining.iter().map(|name| name.to_string()).collect(),
            });
        }

        for name in ready {
            order.push(name.to_string());
            placed.insert(name);
            remaining.remove(name);
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worlds(decls: &[(&str, &[&str])]) -> BTreeMap<String, WorldConfig> {
        decls
            .iter()
            .map(|(name, deps)| {
                (
                    name.to_string(),
                    WorldConfig {
                        inheritance: deps.iter().map(|d| d.to_string()).collect(),
                        ..WorldConfig::default()
                    },
                )
            })
            .collect()
    }

    fn position(order: &[String], name: &str) -> usize {
        order.iter().position(|w| w == name).unwrap()
    }

    #[test]
    fn chain_orders_dependencies_first() {
        let order = world_order(&worlds(&[("c", &["b"]), ("b", &["a"]), ("a", &[])])).unwrap();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn diamond_places_every_world_after_its_dependencies() {
        let order = world_order(&worlds(&[
            ("top", &["left", "right"]),
            ("left", &["base"]),
            ("right", &["base"]),
            ("base", &[]),
        ]))
        .unwrap();

        assert_eq!(order.len(), 4);
        assert!(position(&order, "base") < position(&order, "left"));
        assert!(position(&order, "base") < position(&order, "right"));
        assert!(position(&order, "left") < position(&order, "top"));
        assert!(position(&order, "right") < position(&order, "top"));
    }

    #[test]
    fn batches_are_lexicographic() {
        let order = world_order(&worlds(&[
            ("base", &[]),
            ("zeta", &["base"]),
            ("alpha", &["base"]),
        ]))
        .unwrap();
        assert_eq!(order, ["base", "alpha", "zeta"]);
    }

    #[test]
    fn two_cycle_names_both_worlds() {
        let err = world_order(&worlds(&[("a", &["b"]), ("b", &["a"])])).unwrap_err();
        match err {
            ForgeError::UnresolvableInheritance { worlds } => {
                assert_eq!(worlds, ["a", "b"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn undeclared_dependency_is_unresolvable() {
        let err = world_order(&worlds(&[("a", &[]), ("b", &["ghost"])])).unwrap_err();
        match err {
            ForgeError::UnresolvableInheritance { worlds } => {
                assert_eq!(worlds, ["b"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_configuration_yields_empty_order() {
        assert!(world_order(&BTreeMap::new()).unwrap().is_empty());
    }
}
