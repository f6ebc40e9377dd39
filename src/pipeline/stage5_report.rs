use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report::ReportData;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

pub const REPORT_FILE: &str = "report.txt";
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_reports(data: &ReportData<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let report = out_dir.join(REPORT_FILE);
    write_text(&report, &render_report_text(data))?;

    let summary = out_dir.join(SUMMARY_FILE);
    write_text(&summary, &render_summary_json(data)?)?;

    tracing::info!(
        report = %report.display(),
        summary = %summary.display(),
        "reports written"
    );

    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
