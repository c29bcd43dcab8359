//! Selection Resolver - Archetype resolution and capability activation.

use std::collections::HashSet;

use crate::domain::reference::{ArchetypeHints, ArchetypeWeights, ProductCapabilityMap};

/// Resolves a user's selection against the reference tables.
pub struct SelectionResolver;

impl SelectionResolver {
    /// Resolves the archetype for a customer name.
    ///
    /// # Edge Cases
    /// - Name not hinted (including empty): `default_archetype`
    /// - Hint names an archetype with no weights entry: `default_archetype`
    pub fn resolve_archetype(
        customer_name: &str,
        hints: &ArchetypeHints,
        archetypes: &ArchetypeWeights,
        default_archetype: &str,
    ) -> String {
        hints
            .lookup(customer_name)
            .filter(|hinted| archetypes.contains(hinted))
            .unwrap_or(default_archetype)
            .to_string()
    }

    /// Union of the capabilities activated by the selected products.
    ///
    /// # Edge Cases
    /// - Empty selection: empty set
    /// - Unknown product: contributes nothing
    /// - Duplicate products: no effect
    pub fn activate_capabilities<S: AsRef<str>>(
        selected_products: &[S],
        product_map: &ProductCapabilityMap,
    ) -> HashSet<String> {
        selected_products
            .iter()
            .filter_map(|product| product_map.capabilities_of(product.as_ref()))
            .flatten()
            .cloned()
            .collect()
    }

    /// Selected products missing from the map, deduplicated, in input order.
    pub fn unknown_products<S: AsRef<str>>(
        selected_products: &[S],
        product_map: &ProductCapabilityMap,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut unknown = Vec::new();
        for product in selected_products {
            let product: &str = product.as_ref();
            if !product_map.contains(product) && seen.insert(product) {
                unknown.push(product.to_string());
            }
        }
        unknown
    }
}
