use crate::domain::constants::{BYTES_PER_KB, REMEDIATION_HINTS};
use crate::domain::errors::GuardError;
use crate::domain::models::{BudgetStatus, SizeBudget, SizeMeasurement, SizeReport};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::Path;

/// Reads the artifact and measures its raw and gzip sizes.
///
/// A missing file is reported before any read or compression happens.
pub fn measure(path: &Path) -> Result<SizeMeasurement, GuardError> {
    if !path.exists() {
        return Err(GuardError::ArtifactNotFound(path.to_path_buf()));
    }

    let css = std::fs::read(path).map_err(|source| GuardError::ArtifactUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let size_bytes = css.len() as u64;
    let gzip_bytes = gzip_len(&css)?;
    tracing::debug!(path = %path.display(), size_bytes, gzip_bytes, "measured artifact");

    Ok(SizeMeasurement {
        file: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        path: path.to_string_lossy().to_string(),
        size_bytes,
        gzip_bytes,
    })
}

/// Length of the gzip encoding of `bytes` at the default level.
pub fn gzip_len(bytes: &[u8]) -> std::io::Result<u64> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?.len() as u64)
}

/// Applies the two-level budget: fail above the hard limit, warn above the
/// target, pass otherwise. Both comparisons are strictly greater.
pub fn evaluate(measurement: SizeMeasurement, budget: &SizeBudget) -> SizeReport {
    let size = measurement.size_bytes;

    let (status, over_budget_bytes, recommendations) = if size > budget.max_bytes() {
        (
            BudgetStatus::Fail,
            Some(size - budget.max_bytes()),
            REMEDIATION_HINTS.iter().map(|h| h.to_string()).collect(),
        )
    } else if size > budget.target_bytes() {
        (BudgetStatus::Warn, None, vec![])
    } else {
        (BudgetStatus::Ok, None, vec![])
    };

    SizeReport {
        measurement,
        target_kb: budget.target_kb,
        max_kb: budget.max_kb,
        status,
        over_budget_bytes,
        recommendations,
    }
}

pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / BYTES_PER_KB as f64)
}
