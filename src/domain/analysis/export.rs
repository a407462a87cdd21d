//! Export - delimited-text table and chart projection of ranking results.

use serde::{Deserialize, Serialize};

use crate::domain::ranking::CriteriaSet;

use super::RankingResult;

/// Field delimiter for the text export.
pub const DELIMITER: &str = ",";

/// Header row: `Rank, Vendor, Closeness Score, Percentage, Q1..Qn`.
pub fn export_header(criteria: &CriteriaSet) -> Vec<String> {
    let mut header = vec![
        "Rank".to_string(),
        "Vendor".to_string(),
        "Closeness Score".to_string(),
        "Percentage".to_string(),
    ];
    header.extend(criteria.labels());
    header
}

/// Encodes results as comma-separated text, one row per result in the given order.
///
/// Closeness is fixed to 4 decimals and percentage to 1 decimal with a
/// trailing `%`. Rows are joined with `\n` and there is no trailing newline.
/// Fields are written as-is without quoting, so a name containing a comma
/// spreads over two columns in that row.
pub fn export_as_delimited_text(results: &[RankingResult], criteria: &CriteriaSet) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(export_header(criteria).join(DELIMITER));

    for result in results {
        let mut row = vec![
            result.rank.to_string(),
            result.name.clone(),
            format!("{:.4}", result.closeness),
            result.percentage.to_string(),
        ];
        row.extend(result.original_values.iter().map(|v| v.to_string()));
        lines.push(row.join(DELIMITER));
    }

    lines.join("\n")
}

/// One bar of a closeness chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub name: String,
    pub score: f64,
    pub color: String,
    pub rank: usize,
}

/// Projects results into chart bars; a blank name becomes `Vendor {k}`.
pub fn chart_entries(results: &[RankingResult]) -> Vec<ChartEntry> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| ChartEntry {
            name: if result.name.trim().is_empty() {
                format!("Vendor {}", i + 1)
            } else {
                result.name.clone()
            },
            score: if result.closeness.is_finite() {
                result.closeness
            } else {
                0.0
            },
            color: result.color.clone(),
            rank: result.rank,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AlternativeId, Percentage};
    use crate::domain::ranking::Criterion;

    fn result(rank: usize, name: &str, closeness: f64, values: Vec<u8>) -> RankingResult {
        RankingResult {
            alternative_id: AlternativeId::new(),
            name: name.to_string(),
            closeness,
            percentage: Percentage::from_fraction(closeness),
            rank,
            original_values: values,
            color: "#3B82F6".to_string(),
        }
    }

    #[test]
    fn header_lists_every_criterion() {
        let header = export_header(&CriteriaSet::vendor());
        assert_eq!(header.len(), 12);
        assert_eq!(header[0], "Rank");
        assert_eq!(header[3], "Percentage");
        assert_eq!(header[11], "Q8");
    }

    #[test]
    fn rows_use_fixed_precision() {
        let results = vec![result(1, "Bloom", 0.61803, vec![1, 0, 1, 1, 0, 0, 1, 1])];
        let text = export_as_delimited_text(&results, &CriteriaSet::vendor());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Rank,Vendor,Closeness Score,Percentage,Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8"
        );
        assert_eq!(lines[1], "1,Bloom,0.6180,61.8%,1,0,1,1,0,0,1,1");
    }

    #[test]
    fn empty_results_export_header_only() {
        let text = export_as_delimited_text(&[], &CriteriaSet::vendor());
        assert_eq!(text.lines().count(), 1);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn every_row_has_four_plus_n_columns() {
        let results = vec![
            result(1, "A", 1.0, vec![1; 8]),
            result(2, "B", 0.5, vec![1, 0, 1, 0, 1, 0, 1, 0]),
            result(3, "C", 0.0, vec![0; 8]),
        ];
        let text = export_as_delimited_text(&results, &CriteriaSet::vendor());
        let rows: Vec<Vec<&str>> = text.split('\n').map(|l| l.split(',').collect()).collect();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 12));
        assert_eq!(rows[1][3], "100.0%");
        assert_eq!(rows[3][2], "0.0000");
    }

    #[test]
    fn names_are_written_unquoted() {
        let results = vec![
            result(1, "Bloom", 1.0, vec![1, 1]),
            result(2, "Smith, Jones", 0.5, vec![1, 0]),
        ];
        let criteria = CriteriaSet::new(vec![
            Criterion::new("A?", 0.5, true, "A").unwrap(),
            Criterion::new("B?", 0.5, true, "B").unwrap(),
        ])
        .unwrap();
        let text = export_as_delimited_text(&results, &criteria);
        let widths: Vec<_> = text.lines().map(|l| l.split(',').count()).collect();

        assert_eq!(text.lines().nth(2), Some("2,Smith, Jones,0.5000,50.0%,1,0"));
        assert_eq!(widths, vec![6, 6, 7]);
    }

    #[test]
    fn chart_entries_fall_back_for_blank_names() {
        let results = vec![result(1, "Bloom", 0.9, vec![]), result(2, "  ", 0.1, vec![])];
        let entries = chart_entries(&results);

        assert_eq!(entries[0].name, "Bloom");
        assert_eq!(entries[1].name, "Vendor 2");
        assert_eq!(entries[1].rank, 2);
        assert!((entries[0].score - 0.9).abs() < 1e-12);
    }
}
