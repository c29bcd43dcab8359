//! Plain-text rendering of a comparison report

use std::fmt::Write;

use crate::application::ComparisonReport;
use crate::domain::analysis::{ComparisonRow, Positioning};

/// Renders the report as aligned plain text.
pub fn render_text(report: &ComparisonReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Capability Comparison - {}", display_customer(report));
    let _ = writeln!(out, "{} vs {}", report.primary_vendor, report.competitor);
    if report.archetype_overridden() {
        let _ = writeln!(
            out,
            "Archetype: {} (override; suggested: {})",
            report.archetype, report.suggested_archetype
        );
    } else {
        let _ = writeln!(out, "Archetype: {} (suggested)", report.archetype);
    }

    out.push_str("\nIndustry Weight Drivers\n");
    match &report.industry_weight {
        Some(weight) => {
            let width = column_width(report.drivers.iter().map(|d| d.factor.as_str()), 15);
            for driver in &report.drivers {
                let _ = writeln!(out, "  {:<width$}  {}", driver.factor, driver.weight);
            }
            let _ = writeln!(out, "Derived Industry Weight: {}", weight);
        }
        None => out.push_str("  No industry drivers defined for this customer.\n"),
    }

    out.push('\n');
    render_rows(&mut out, report);

    out.push_str("\nInsights\n");
    let summary = &report.summary;
    let mut any = false;
    if !summary.advantages.is_empty() {
        let _ = writeln!(
            out,
            "  {} Advantages: {}",
            report.primary_vendor,
            summary.advantages.join(", ")
        );
        any = true;
    }
    if !summary.pressures.is_empty() {
        let _ = writeln!(
            out,
            "  Competitive Pressure Areas: {}",
            summary.pressures.join(", ")
        );
        any = true;
    }
    if !summary.out_of_scope.is_empty() {
        let _ = writeln!(
            out,
            "  Capabilities intentionally out of scope for selected {} products: {}",
            report.primary_vendor,
            summary.out_of_scope.join(", ")
        );
        any = true;
    }
    if !report.unknown_products.is_empty() {
        let _ = writeln!(
            out,
            "  Ignored unknown products: {}",
            report.unknown_products.join(", ")
        );
        any = true;
    }
    if !any {
        out.push_str("  None\n");
    }

    out
}

fn render_rows(out: &mut String, report: &ComparisonReport) {
    let capability_width =
        column_width(report.rows.iter().map(|r| r.capability.as_str()), "Capability".len());
    let vendor_header = format!("{} Score", report.primary_vendor);
    let competitor_header = format!("{} Score", report.competitor);
    let vendor_width = vendor_header.chars().count();
    let competitor_width = competitor_header.chars().count();
    let positionings: Vec<String> = report
        .rows
        .iter()
        .map(|r| positioning_label(r, &report.primary_vendor))
        .collect();
    let positioning_width =
        column_width(positionings.iter().map(String::as_str), "Positioning".len());

    let _ = writeln!(
        out,
        "{:<cw$}  {:<vw$}  {:<kw$}  {:<pw$}  Scope Status",
        "Capability",
        vendor_header,
        competitor_header,
        "Positioning",
        cw = capability_width,
        vw = vendor_width,
        kw = competitor_width,
        pw = positioning_width,
    );
    for (row, positioning) in report.rows.iter().zip(&positionings) {
        let _ = writeln!(
            out,
            "{:<cw$}  {:<vw$}  {:<kw$}  {:<pw$}  {}",
            row.capability,
            row.vendor_score.to_string(),
            row.competitor_score.to_string(),
            positioning,
            row.scope,
            cw = capability_width,
            vw = vendor_width,
            kw = competitor_width,
            pw = positioning_width,
        );
    }
}

fn positioning_label(row: &ComparisonRow, primary_vendor: &str) -> String {
    match row.positioning {
        Positioning::VendorAdvantage => format!("{} Advantage", primary_vendor),
        other => other.label().to_string(),
    }
}

fn display_customer(report: &ComparisonReport) -> &str {
    if report.customer_name.trim().is_empty() {
        "(unnamed customer)"
    } else {
        &report.customer_name
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{compare, RunComparisonCommand};
    use crate::domain::reference::ReferenceData;

    fn report(customer: &str, products: &[&str], archetype: Option<&str>) -> ComparisonReport {
        let cmd = RunComparisonCommand {
            customer_name: customer.to_string(),
            archetype_override: archetype.map(str::to_string),
            products: products.iter().map(|p| p.to_string()).collect(),
            competitor: "Palo Alto Networks".to_string(),
        };
        compare(&ReferenceData::demo(), &cmd).unwrap()
    }

    #[test]
    fn text_contains_weight_and_insights() {
        let text = render_text(&report(
            "State Bank of India",
            &["Cisco Secure Firewall", "Cisco Duo"],
            None,
        ));

        assert!(text.contains("Capability Comparison - State Bank of India"));
        assert!(text.contains("Archetype: PSU Large Bank (suggested)"));
        assert!(text.contains("Derived Industry Weight: HIGH (Avg: 4.0)"));
        assert!(text.contains("Cisco Advantages: Identity & Zero Trust, Compliance & Sovereignty"));
        assert!(text.contains("Competitive Pressure Areas: Threat Prevention"));
        assert!(text.contains(
            "out of scope for selected Cisco products: Email Security, Cloud Security (SSE)"
        ));
        assert!(text.contains("Cisco Advantage"));
        assert!(text.contains("Not Compared"));
    }

    #[test]
    fn non_ascii_vendor_header_is_not_overpadded() {
        let mut report = report("SBI", &["Cisco Duo"], None);
        report.primary_vendor = "Société Générale".to_string();
        let text = render_text(&report);

        let header = text
            .lines()
            .find(|l| l.starts_with("Capability  "))
            .unwrap();
        assert!(header.contains("Société Générale Score  Palo Alto Networks Score  "));

        let row = text
            .lines()
            .find(|l| l.starts_with("Email Security"))
            .unwrap();
        let column = |line: &str, needle: &str| line[..line.find(needle).unwrap()].chars().count();
        assert_eq!(column(header, "Positioning"), column(row, "Not Compared"));
    }

    #[test]
    fn text_shows_no_drivers_warning() {
        let text = render_text(&report("SBI", &[], Some("Cooperative Bank")));
        assert!(text.contains("No industry drivers defined for this customer."));
        assert!(text.contains("override; suggested: PSU Large Bank"));
        assert!(!text.contains("Cisco Advantages"));
    }

    #[test]
    fn text_has_one_line_per_capability() {
        let text = render_text(&report("RBI", &["Cisco Umbrella"], None));
        let matrix_lines = text
            .lines()
            .filter(|l| l.ends_with("In Scope") || l.ends_with("Out of Scope"))
            .count();
        assert_eq!(matrix_lines, 6);
    }
}
