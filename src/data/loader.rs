use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, FAILURE, SUCCESS};

/// Columns every input file must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: u8 },
    #[error("row {row}: payload mass must be a non-negative number, got {value}")]
    InvalidPayload { row: usize, value: f64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row including the [`REQUIRED_COLUMNS`] (recommended)
/// * `.json` – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset =
        read_path(path, &ext).with_context(|| format!("loading {}", path.display()))?;

    log::debug!(
        "{}: {} launches across {} sites",
        path.display(),
        dataset.len(),
        dataset.sites().len()
    );
    Ok(dataset)
}

fn read_path(path: &Path, ext: &str) -> Result<LaunchDataset, DatasetError> {
    match ext {
        "csv" => read_csv(BufReader::new(File::open(path)?)),
        "json" => read_json(BufReader::new(File::open(path)?)),
        other => Err(DatasetError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per row.
/// Columns outside [`REQUIRED_COLUMNS`] (index, flight number, booster
/// version, ...) are ignored.
pub fn read_csv<R: Read>(input: R) -> Result<LaunchDataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DatasetError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result?;
        validate(row_no + 1, &record)?;
        records.push(record);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 1,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
pub fn read_json<R: Read>(input: R) -> Result<LaunchDataset, DatasetError> {
    let records: Vec<LaunchRecord> = serde_json::from_reader(input)?;
    for (row_no, record) in records.iter().enumerate() {
        validate(row_no + 1, record)?;
    }
    Ok(LaunchDataset::from_records(records))
}

/// `row` is 1-based, counting data rows after the header.
fn validate(row: usize, record: &LaunchRecord) -> Result<(), DatasetError> {
    if record.outcome_class != SUCCESS && record.outcome_class != FAILURE {
        return Err(DatasetError::InvalidClass {
            row,
            value: record.outcome_class,
        });
    }
    let p = record.payload_mass_kg;
    if !p.is_finite() || p < 0.0 {
        return Err(DatasetError::InvalidPayload { row, value: p });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SPACEX_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,1,9600.0,F9 FT  B1029.1,FT
4,5,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

    #[test]
    fn reads_spacex_layout_and_ignores_extra_columns() {
        let ds = read_csv(SPACEX_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.sites(), ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(ds.payload_bounds(), (0.0, 9600.0));
        assert_eq!(
            ds.records()[3],
            LaunchRecord::new("VAFB SLC-4E", 9600.0, 1, "FT")
        );
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "Launch Site,class,Booster Version Category\nKSC,1,FT\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Payload Mass (kg)")));
    }

    #[test]
    fn class_outside_zero_one_is_rejected() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC,100,1,FT\n\
                   KSC,200,2,FT\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidClass { row: 2, value: 2 }));
    }

    #[test]
    fn negative_payload_is_rejected() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC,-5,1,FT\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidPayload { row: 1, .. }));
    }

    #[test]
    fn malformed_number_is_a_csv_error() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   KSC,heavy,1,FT\n";
        assert!(matches!(
            read_csv(csv.as_bytes()).unwrap_err(),
            DatasetError::Csv(_)
        ));
    }

    #[test]
    fn json_errors_count_rows_from_one() {
        let json = r#"[
            {"Launch Site": "KSC", "Payload Mass (kg)": 100, "class": 1,
             "Booster Version Category": "FT"},
            {"Launch Site": "KSC", "Payload Mass (kg)": 200, "class": 7,
             "Booster Version Category": "FT"}
        ]"#;
        let err = read_json(json.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "row 2: class must be 0 or 1, got 7");
    }

    #[test]
    fn reads_json_records() {
        let json = r#"[
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 2490.0, "class": 1,
             "Booster Version Category": "FT", "Flight Number": 5},
            {"Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 525, "class": 0,
             "Booster Version Category": "v1.0"}
        ]"#;
        let ds = read_json(json.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[1].payload_mass_kg, 525.0);
    }

    #[test]
    fn load_file_dispatches_on_extension() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(SPACEX_CSV.as_bytes()).unwrap();
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 5);
    }

    #[test]
    fn load_file_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn load_file_fails_for_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(&dir.path().join("spacex_launch_dash.csv")).is_err());
    }
}
