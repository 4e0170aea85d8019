use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::sheet::{Sheet, SheetRow};

const ID_COLUMN: &str = "id";

/// Reads a CSV file with a header row.
///
/// Rows are identified by their `id` column when every record carries a
/// distinct, non-empty value there. Otherwise every row falls back to its
/// 1-based record number, so ids stay unique. Short records leave trailing
/// fields missing.
pub fn load_sheet(csv_path: &Path) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let has_id_column = columns.iter().any(|name| name == ID_COLUMN);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let values: HashMap<String, String> = columns
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        records.push(values);
    }

    let use_id_column = has_id_column && id_column_is_unique(&records);
    if has_id_column && !use_id_column {
        log::warn!(
            "{} has missing, empty or repeated ids; using record numbers instead",
            csv_path.display()
        );
    }

    let rows: Vec<SheetRow> = records
        .into_iter()
        .enumerate()
        .map(|(row_idx, values)| {
            let id = match values.get(ID_COLUMN) {
                Some(id) if use_id_column => id.clone(),
                _ => (row_idx + 1).to_string(),
            };
            SheetRow::new(id, values)
        })
        .collect();

    log::info!(
        "loaded {} rows with {} columns from {}",
        rows.len(),
        columns.len(),
        csv_path.display()
    );

    Ok(Sheet { columns, rows })
}

fn id_column_is_unique(records: &[HashMap<String, String>]) -> bool {
    let mut seen = HashSet::new();
    records.iter().all(|values| match values.get(ID_COLUMN) {
        Some(id) if !id.is_empty() => seen.insert(id.as_str()),
        _ => false,
    })
}
