use crate::lookup::{LookupReport, ProfileRecord};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

#[derive(Serialize)]
struct ReportDocument<'a> {
    profile: &'a ProfileRecord,
    lookup: Option<&'a Value>,
    lookup_error: Option<String>,
}

impl<'a> From<&'a LookupReport> for ReportDocument<'a> {
    fn from(report: &'a LookupReport) -> Self {
        let (lookup, lookup_error) = match &report.enrichment {
            Ok(record) => (Some(record.document()), None),
            Err(error) => (None, Some(error.to_string())),
        };
        Self {
            profile: &report.profile,
            lookup,
            lookup_error,
        }
    }
}

/// Writes the report as one pretty-printed JSON document.
pub fn render_json<W: Write>(report: &LookupReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &ReportDocument::from(report))
        .context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}
