//! Export the resampled thrust grid to CSV.
//!
//! One row per sampled division, one column per motor, so the curves that were
//! actually compared can be charted in a spreadsheet.

use std::path::Path;

use crate::compare::ThrustGrid;
use crate::domain::SourceBatch;
use crate::error::AppError;

/// Write `time_s,<source 1>,<source 2>,...` rows for every division.
pub fn write_grid_csv(path: &Path, grid: &ThrustGrid, batch: &SourceBatch) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::new(2, format!("Failed to create grid CSV '{}': {e}", path.display()))
    })?;

    let mut header = vec!["time_s".to_string()];
    header.extend(batch.sources().map(str::to_string));
    writer
        .write_record(&header)
        .map_err(|e| AppError::new(2, format!("Failed to write grid CSV header: {e}")))?;

    for (i, &t) in grid.times().iter().enumerate() {
        let mut row = vec![format!("{t:.6}")];
        row.extend(grid.division(i).map(|f| format!("{f:.4}")));
        writer
            .write_record(&row)
            .map_err(|e| AppError::new(2, format!("Failed to write grid CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush grid CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::fixtures::constant_motor;
    use crate::compare::resample;

    #[test]
    fn grid_csv_has_one_column_per_source() {
        let batch = SourceBatch::from_iter([
            (constant_motor(100.0, 1.0, 10, &[], "a"), "a.eng".to_string()),
            (constant_motor(50.0, 1.0, 10, &[], "b"), "b.rse".to_string()),
        ]);
        let grid = resample(&batch, 1.0, 3);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.csv");
        write_grid_csv(&path, &grid, &batch).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "time_s,a.eng,b.rse");
        assert_eq!(lines[1], "0.000000,100.0000,50.0000");
        assert_eq!(lines[3], "1.000000,100.0000,50.0000");
        assert_eq!(lines.len(), 4);
    }
}
