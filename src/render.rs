//! Text and JSON rendering of a seating arrangement.

use serde::Serialize;

use crate::models::{PassengerId, SeatingArrangement};

/// Render the layout as printed by the CLI: one line of passenger ids per row,
/// then the satisfaction percentage.
///
/// Example output:
/// ```text
/// 4 5 6 7
/// 1 2 3 12
/// 11 9 10 8
/// 13 14 15 16
/// 100.0%
/// ```
pub fn render_layout(arrangement: &SeatingArrangement) -> String {
    let mut output = String::new();
    for row in &arrangement.rows {
        render_row(&mut output, row.iter().map(|p| p.id));
    }
    output.push_str(&arrangement.formatted_satisfaction());
    output.push('\n');
    output
}

fn render_row(output: &mut String, ids: impl Iterator<Item = PassengerId>) {
    for (i, id) in ids.enumerate() {
        if i > 0 {
            output.push(' ');
        }
        output.push_str(&id.to_string());
    }
    output.push('\n');
}

/// Machine-readable summary of an arrangement.
#[derive(Debug, Clone, Serialize)]
pub struct ArrangementReport {
    pub rows: Vec<Vec<PassengerId>>,
    pub satisfaction: String,
    pub satisfaction_percent: f64,
    pub passenger_count: usize,
    pub seated_count: usize,
    pub opened_rows: usize,
}

impl From<&SeatingArrangement> for ArrangementReport {
    fn from(arrangement: &SeatingArrangement) -> Self {
        Self {
            rows: arrangement.seat_ids(),
            satisfaction: arrangement.formatted_satisfaction(),
            satisfaction_percent: arrangement.satisfaction,
            passenger_count: arrangement.passenger_count,
            seated_count: arrangement.seated_count(),
            opened_rows: arrangement.opened_rows,
        }
    }
}

/// Render the arrangement as pretty-printed JSON.
pub fn render_json(arrangement: &SeatingArrangement) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ArrangementReport::from(arrangement))
}
