use anyhow::Context;
use excel_consolidator::{
    config::Config,
    domain::merger::{self, MergeOptions, MergeSummary, log_summary, setup},
    domain::models::Severity,
    inbound::file::RawFile,
    outbound::export,
};
use std::path::Path;
use std::time::Instant;
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    let no_coerce = std::env::args().any(|arg| arg == "--no-coerce");
    let no_sort = std::env::args().any(|arg| arg == "--no-sort");
    let config =
        Config::from_env().context("Failed to load configuration from environment variables")?;

    setup::setup_logging(config.log_level)?;

    let files_to_process = setup::discover_files(&config.input_dir)?;
    info!(
        "Starting consolidation of {} file(s) from '{}'",
        files_to_process.len(),
        config.input_dir
    );
    let start_time = Instant::now();

    let mut raw_files = Vec::new();
    for (file_path, file_name) in &files_to_process {
        let bytes = std::fs::read(file_path)
            .with_context(|| format!("Failed to read file: {}", file_name))?;
        raw_files.push(RawFile {
            name: file_name.clone(),
            bytes,
        });
    }

    let options = MergeOptions {
        coerce_numeric: !no_coerce,
        fiscal_sort: !no_sort,
    };
    let consolidation = merger::consolidate(&raw_files, &options);

    for diagnostic in &consolidation.diagnostics {
        match diagnostic.severity {
            Severity::Info => info!("{}", diagnostic),
            Severity::Warning => warn!("{}", diagnostic),
            Severity::Error => error!("{}", diagnostic),
        }
    }

    let total_rows = match &consolidation.table {
        Some(table) => {
            let cursor = export::write_workbook(table)?;
            std::fs::create_dir_all(&config.output_dir).with_context(|| {
                format!("Failed to create output directory: {}", config.output_dir)
            })?;
            let out_path = Path::new(&config.output_dir).join(export::EXPORT_FILE_NAME);
            std::fs::write(&out_path, cursor.into_inner())
                .with_context(|| format!("Failed to write workbook to {}", out_path.display()))?;
            info!("Wrote consolidated workbook to {}", out_path.display());
            table.row_count()
        }
        None => 0,
    };

    log_summary(MergeSummary {
        files_supplied: raw_files.len(),
        files_merged: consolidation.files_merged,
        files_skipped: consolidation.files_skipped,
        total_rows,
        total_runtime_secs: start_time.elapsed().as_secs_f64(),
    });

    Ok(())
}
