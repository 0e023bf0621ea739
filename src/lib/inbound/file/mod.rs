pub mod excel;
pub mod html;

use crate::domain::models::Table;
use tracing::debug;

/// One uploaded file: a name (used only for extension dispatch and messages)
/// and the raw bytes. Not retained past a single pipeline run.
#[derive(Debug, Clone)]
pub struct RawFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Outcome of loading one file. Parser failures never escape this module;
/// they become a `Skipped` with a displayable reason.
#[derive(Debug)]
pub enum LoadResult {
    Loaded(Table),
    Skipped { reason: String },
}

type ParseFn = fn(&[u8]) -> anyhow::Result<Table>;

/// Ordered candidate parsers for a file name; first success wins. `.xls`
/// files that the binary parser rejects are retried as HTML, since legacy
/// exports are often HTML tables mislabeled with a spreadsheet extension.
fn candidate_parsers(file_name: &str) -> &'static [(&'static str, ParseFn)] {
    if file_name.ends_with(".xlsx") {
        &[("xlsx workbook", excel::parse_xlsx as ParseFn)]
    } else if file_name.ends_with(".xls") {
        &[
            ("xls workbook", excel::parse_xls as ParseFn),
            ("html table", html::parse_first_table as ParseFn),
        ]
    } else {
        &[]
    }
}

pub fn load(file: &RawFile) -> LoadResult {
    let candidates = candidate_parsers(&file.name);
    if candidates.is_empty() {
        return LoadResult::Skipped {
            reason: "unsupported file extension".to_string(),
        };
    }
    let mut last_error = None;
    for (label, parse) in candidates {
        match parse(&file.bytes) {
            Ok(table) if table.is_empty() => {
                return LoadResult::Skipped {
                    reason: "contains no data rows".to_string(),
                };
            }
            Ok(table) => {
                debug!(
                    "Parsed '{}' as {} ({} rows)",
                    file.name,
                    label,
                    table.row_count()
                );
                return LoadResult::Loaded(table);
            }
            Err(e) => {
                debug!("Parser '{}' failed on '{}': {}", label, file.name, e);
                last_error = Some(e);
            }
        }
    }
    let reason = match last_error {
        Some(e) => format!("could not be read ({e})"),
        None => "could not be read".to_string(),
    };
    LoadResult::Skipped { reason }
}
