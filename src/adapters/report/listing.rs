//! Listing of what a reference data generation offers.

use std::fmt::Write;

use crate::ports::ReferenceSnapshot;

/// Renders archetypes, products and competitors of a snapshot.
pub fn render_listing(snapshot: &ReferenceSnapshot) -> String {
    let data = &snapshot.data;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Reference data {} (loaded {})",
        snapshot.short_fingerprint(),
        snapshot.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Primary vendor: {}", data.primary_vendor);

    let default_archetype = data.default_archetype();
    out.push_str("\nArchetypes\n");
    for archetype in data.archetypes.iter() {
        let marker = if Some(archetype.name.as_str()) == default_archetype {
            " (default)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {}{} - {} factors",
            archetype.name,
            marker,
            archetype.factors.len()
        );
    }

    out.push_str("\nProducts\n");
    for product in data.products.iter() {
        let _ = writeln!(out, "  {}: {}", product.name, product.capabilities.join(", "));
    }

    let _ = writeln!(out, "\nCustomer hints ({})", data.hints.len());
    if data.hints.is_empty() {
        out.push_str("  none\n");
    }
    for (customer, archetype) in data.hints.iter() {
        let _ = writeln!(out, "  {} -> {}", customer, archetype);
    }

    out.push_str("\nCompetitors\n");
    for competitor in data.competitors() {
        let _ = writeln!(out, "  {}", competitor);
    }

    out
}
