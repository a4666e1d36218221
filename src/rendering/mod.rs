//! Output rendering: text tables and JSON.
//!
//! Everything here produces strings; printing is the binary's business.
//! The text tables mirror the original exhibit listing, while the JSON
//! forms carry the machine-readable reason tags so callers can do their
//! own formatting or localization.

use serde_json::json;

use crate::catalog::Catalog;
use crate::models::PlacementReport;

/// Renders rows as aligned text columns with a header line.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    let render_row = |cells: &[String]| -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(&format!("{cell:<width$}", width = widths[i]));
        }
        line.trim_end().to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(ToString::to_string).collect();
    out.push_str(&render_row(&header_cells));
    out.push('\n');
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

/// Renders the enclosure table.
pub fn enclosure_table(catalog: &Catalog) -> String {
    let rows: Vec<Vec<String>> = catalog
        .enclosures()
        .iter()
        .map(|e| {
            let animals = if e.residents.is_empty() {
                "empty".to_string()
            } else {
                format!("{} {}", e.residents.len(), e.residents.join(", "))
            };
            vec![
                e.id.to_string(),
                e.habitat.to_string(),
                e.capacity.to_string(),
                animals,
            ]
        })
        .collect();

    format!(
        "The zoo has the following enclosures.\n{}",
        render_table(&["enclosure", "habitat", "total space", "current animals"], &rows)
    )
}

/// Renders the species table.
pub fn species_table(catalog: &Catalog) -> String {
    let rows: Vec<Vec<String>> = catalog
        .species_table()
        .iter()
        .map(|s| {
            let habitats = s
                .habitats
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" or ");
            vec![
                s.name.to_uppercase(),
                s.unit_size.to_string(),
                habitats,
                if s.carnivore { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    format!(
        "SPECIES\n{}",
        render_table(&["species", "size", "habitat", "carnivore"], &rows)
    )
}

/// Renders a placement report as text.
///
/// Rejections are listed one per line with the rule message; viable
/// enclosures follow as a table. Zero successes renders the distinct
/// terminal line rather than an empty table.
pub fn report_table(report: &PlacementReport) -> String {
    let mut out = String::new();

    for failure in &report.failures {
        out.push_str(&format!(
            "enclosure {}: {}\n",
            failure.enclosure, failure.violation
        ));
    }

    if report.any_viable() {
        let rows: Vec<Vec<String>> = report
            .successes
            .iter()
            .map(|s| {
                vec![
                    s.enclosure.to_string(),
                    s.free_space.to_string(),
                    s.total_capacity.to_string(),
                ]
            })
            .collect();
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&render_table(
            &["enclosure", "free space", "total space"],
            &rows,
        ));
    } else {
        out.push_str("No viable enclosure.\n");
    }

    out
}

/// Renders a placement report as pretty JSON.
pub fn report_json(report: &PlacementReport) -> String {
    let failures: Vec<_> = report
        .failures
        .iter()
        .map(|f| {
            json!({
                "enclosure": f.enclosure,
                "reason": f.violation.reason(),
                "message": f.violation.to_string(),
            })
        })
        .collect();

    let value = json!({
        "species": report.request.species,
        "quantity": report.request.quantity,
        "any_viable": report.any_viable(),
        "successes": report.successes,
        "failures": failures,
    });

    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// Renders the catalog as pretty JSON.
pub fn catalog_json(catalog: &Catalog) -> String {
    let value = json!({
        "species": catalog.species_table(),
        "enclosures": catalog.enclosures(),
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::services::PlacementService;

    #[test]
    fn test_enclosure_table_lists_every_enclosure() {
        let catalog = Catalog::reference();
        let table = enclosure_table(&catalog);
        assert!(table.starts_with("The zoo has the following enclosures."));
        assert!(table.contains("savanna-and-river"));
        assert!(table.contains("empty"));
        assert!(table.contains("1 monkey"));
    }

    #[test]
    fn test_species_table_joins_habitats() {
        let catalog = Catalog::reference();
        let table = species_table(&catalog);
        assert!(table.contains("HIPPOPOTAMUS"));
        assert!(table.contains("savanna or river"));
    }

    #[test]
    fn test_report_table_with_successes() {
        let catalog = Catalog::reference();
        let report = PlacementService::new(&catalog)
            .find_placements("monkey", 2)
            .unwrap();
        let table = report_table(&report);
        assert!(table.contains("free space"));
        assert!(!table.contains("No viable enclosure."));
    }

    #[test]
    fn test_report_table_no_viable() {
        let catalog = Catalog::reference();
        let report = PlacementService::new(&catalog)
            .find_placements("crocodile", 3)
            .unwrap();
        let table = report_table(&report);
        assert!(table.contains("No viable enclosure."));
    }

    #[test]
    fn test_report_json_carries_reason_tags() {
        let catalog = Catalog::reference();
        let report = PlacementService::new(&catalog)
            .find_placements("crocodile", 3)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report_json(&report)).unwrap();
        assert_eq!(value["any_viable"], false);
        assert_eq!(value["failures"][3]["reason"], "insufficient_space");
    }

    #[test]
    fn test_catalog_json_roundtrips() {
        let catalog = Catalog::reference();
        let value: serde_json::Value = serde_json::from_str(&catalog_json(&catalog)).unwrap();
        assert_eq!(value["species"].as_array().unwrap().len(), 6);
        assert_eq!(value["enclosures"].as_array().unwrap().len(), 5);
    }
}
