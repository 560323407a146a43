use crate::inventory::domain::ComponentRegistry;

/// Counts of what a filter pass removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Usages dropped because they carried no label
    pub usages_removed: usize,
    /// Components dropped because no labeled usage remained
    pub components_removed: usize,
}

/// InventoryFilter - Reduces the registry to labeled components
///
/// Runs once, synchronously, after all labels have been resolved.
pub struct InventoryFilter;

impl InventoryFilter {
    /// Removes unlabeled usages, then removes components left without usages
    ///
    /// # Arguments
    /// * `registry` - The fully labeled component registry
    ///
    /// # Returns
    /// A summary of how many usages and components were removed
    pub fn retain_labeled(registry: &mut ComponentRegistry) -> FilterSummary {
        let mut summary = FilterSummary::default();

        registry.retain(|component| {
            summary.usages_removed += component.retain_labeled_usages();
            if component.usages().is_empty() {
                summary.components_removed += 1;
                false
            } else {
                true
            }
        });

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{ComponentHash, Usage};

    fn labeled(stage: &str, public_id: &str, labels: &[&str]) -> Usage {
        let mut usage = Usage::new(stage, public_id);
        usage.add_labels(labels.iter().map(|l| l.to_string()));
        usage
    }

    fn registry_with(entries: Vec<(&str, Usage)>) -> ComponentRegistry {
        let mut registry = ComponentRegistry::new();
        for (hash, usage) in entries {
            registry.record_sighting(ComponentHash::new(hash), None, None, usage);
        }
        registry
    }

    #[test]
    fn test_filter_keeps_only_labeled_usages() {
        let mut registry = registry_with(vec![
            ("h1", labeled("build", "p1", &["gold"])),
            ("h1", Usage::new("build", "p2")),
        ]);

        let summary = InventoryFilter::retain_labeled(&mut registry);

        assert_eq!(
            summary,
            FilterSummary {
                usages_removed: 1,
                components_removed: 0
            }
        );
        let component = registry.get(&ComponentHash::new("h1")).unwrap();
        assert_eq!(component.usages().len(), 1);
        assert_eq!(component.usages()[0].application_public_id(), "p1");
        assert_eq!(component.usages()[0].labels(), &["gold"]);
    }

    #[test]
    fn test_filter_drops_components_without_labels() {
        let mut registry = registry_with(vec![
            ("h1", Usage::new("build", "p1")),
            ("h1", Usage::new("release", "p1")),
            ("h2", labeled("build", "p1", &["approved"])),
        ]);

        let summary = InventoryFilter::retain_labeled(&mut registry);

        assert_eq!(summary.usages_removed, 2);
        assert_eq!(summary.components_removed, 1);
        assert!(!registry.contains(&ComponentHash::new("h1")));
        assert!(registry.contains(&ComponentHash::new("h2")));
    }

    #[test]
    fn test_filter_postcondition_holds_for_every_component() {
        let mut registry = registry_with(vec![
            ("a", Usage::new("build", "p1")),
            ("a", labeled("build", "p2", &["x", "x"])),
            ("b", Usage::new("build", "p1")),
            ("c", labeled("release", "p3", &["y"])),
            ("c", Usage::new("release", "p4")),
            ("c", labeled("build", "p5", &["z"])),
        ]);

        InventoryFilter::retain_labeled(&mut registry);

        assert_eq!(registry.len(), 2);
        for component in registry.components() {
            assert!(!component.usages().is_empty());
            assert!(component.usages().iter().all(|u| !u.labels().is_empty()));
        }
        let c = registry.get(&ComponentHash::new("c")).unwrap();
        let ids: Vec<&str> = c.usages().iter().map(|u| u.application_public_id()).collect();
        assert_eq!(ids, vec!["p3", "p5"]);
    }

    #[test]
    fn test_filter_empty_registry() {
        let mut registry = ComponentRegistry::new();
        let summary = InventoryFilter::retain_labeled(&mut registry);
        assert_eq!(summary, FilterSummary::default());
        assert!(registry.is_empty());
    }
}
