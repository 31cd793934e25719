use super::report::{ReportLayout, TeamRow};

const NAME_WIDTH: usize = 15;
const CATEGORY_WIDTH: usize = 10;
const EMPTY_CELL: &str = "—";

fn clip(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

fn mark(present: bool) -> &'static str {
    if present { "P" } else { "A" }
}

pub fn header(layout: ReportLayout) -> Vec<String> {
    let mut cols = vec!["Team".to_string(), "Count".to_string()];
    for i in 1..=layout.capacity() {
        cols.push(format!("Name {i}"));
        cols.push(format!("Cat {i}"));
        cols.extend(["D1", "D2", "D3"].map(String::from));
    }
    cols
}

/// Flattens team rows into the fixed-width attendance sheet, one line per team.
pub fn sheet_rows(rows: &[TeamRow], layout: ReportLayout) -> Vec<Vec<String>> {
    rows.iter()
        .map(|team| {
            let mut cells = vec![team.team_id.to_string(), team.delegate_count.to_string()];
            for i in 0..layout.capacity() {
                match team.delegates.get(i) {
                    Some(d) => {
                        cells.push(clip(&d.name, NAME_WIDTH));
                        cells.push(
                            d.category
                                .as_deref()
                                .map(|c| clip(c, CATEGORY_WIDTH))
                                .unwrap_or_else(|| EMPTY_CELL.to_string()),
                        );
                        cells.extend([mark(d.day1), mark(d.day2), mark(d.day3)].map(String::from));
                    }
                    None => cells.extend(std::iter::repeat(EMPTY_CELL.to_string()).take(5)),
                }
            }
            cells
        })
        .collect()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn to_csv(rows: &[TeamRow], layout: ReportLayout) -> String {
    std::iter::once(header(layout))
        .chain(sheet_rows(rows, layout))
        .map(|line| line.iter().map(|c| csv_field(c)).collect::<Vec<_>>().join(","))
        .fold(String::new(), |mut out, line| {
            out.push_str(&line);
            out.push_str("\r\n");
            out
        })
}
