use crate::domain::model::{LanguageStatistics, ReportRow, SourceReport};
use crate::utils::error::{Result, StatsError};

pub const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
}

/// Converts per-language statistics into display rows, keeping their order.
///
/// With `zero_when_not_found`, a language whose `found` is absent or zero
/// shows zero for every column even if something was processed.
pub fn format_rows(
    languages: &[(String, LanguageStatistics)],
    zero_when_not_found: bool,
) -> Vec<ReportRow> {
    languages
        .iter()
        .map(|(label, stats)| {
            let found = stats.found.unwrap_or(0);
            if zero_when_not_found && found == 0 {
                return ReportRow {
                    label: label.clone(),
                    found: 0,
                    processed: 0,
                    average: 0,
                };
            }
            ReportRow {
                label: label.clone(),
                found,
                processed: stats.processed,
                average: stats.average.unwrap_or(0),
            }
        })
        .collect()
}

fn row_cells(row: &ReportRow) -> [String; 4] {
    [
        row.label.clone(),
        row.found.to_string(),
        row.processed.to_string(),
        row.average.to_string(),
    ]
}

/// Bordered ASCII table with the title set into the top border.
pub fn render_table(title: &str, rows: &[ReportRow]) -> String {
    let header: [String; 4] = HEADERS.map(str::to_string);
    let body: Vec<[String; 4]> = rows.iter().map(row_cells).collect();

    let mut widths = [0usize; 4];
    for cells in std::iter::once(&header).chain(body.iter()) {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator: String = std::iter::once("+".to_string())
        .chain(widths.iter().map(|w| format!("{}+", "-".repeat(w + 2))))
        .collect();

    let format_line = |cells: &[String; 4], align_numbers: bool| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, width))| {
                if align_numbers && col > 0 {
                    format!("{:>width$}", cell, width = width)
                } else {
                    format!("{:<width$}", cell, width = width)
                }
            })
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(titled_border(&separator, title));
    lines.push(format_line(&header, false));
    lines.push(separator.clone());
    for cells in &body {
        lines.push(format_line(cells, true));
    }
    lines.push(separator);

    lines.join("\n")
}

/// 標題放不下時就只畫邊框
fn titled_border(separator: &str, title: &str) -> String {
    let border: Vec<char> = separator.chars().collect();
    let title: Vec<char> = title.chars().collect();

    if title.is_empty() || title.len() + 2 > border.len() {
        return separator.to_string();
    }

    border[..1]
        .iter()
        .chain(title.iter())
        .chain(border[1 + title.len()..].iter())
        .collect()
}

/// All sources in one delimited document, one line per source and language.
pub fn render_delimited(
    reports: &[SourceReport],
    zero_when_not_found: bool,
    delimiter: u8,
) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["source", "language", "found", "processed", "average"])?;
    for report in reports {
        for row in format_rows(&report.languages, zero_when_not_found) {
            writer.write_record([
                report.title.clone(),
                row.label,
                row.found.to_string(),
                row.processed.to_string(),
                row.average.to_string(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StatsError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| StatsError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn render(
    reports: &[SourceReport],
    zero_when_not_found: bool,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(reports
            .iter()
            .map(|report| {
                render_table(
                    &report.title,
                    &format_rows(&report.languages, zero_when_not_found),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Csv => render_delimited(reports, zero_when_not_found, b','),
        OutputFormat::Tsv => render_delimited(reports, zero_when_not_found, b'\t'),
    }
}
