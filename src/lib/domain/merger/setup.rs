use anyhow::Context;
use chrono::Utc;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    Registry, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_DIR: &str = "log";

pub fn setup_logging(log_level: tracing::Level) -> anyhow::Result<()> {
    std::fs::create_dir_all(LOG_DIR)
        .with_context(|| format!("Failed to create log directory: {}", LOG_DIR))?;
    let timestamp_str = Utc::now().format("%Y-%m-%d_%H-%M-%S");
    let log_file_path = format!("{}/consolidator_{}.log", LOG_DIR, timestamp_str);
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_file_path)
        .with_context(|| format!("Failed to open log file: {}", log_file_path))?;
    Registry::default()
        .with(LevelFilter::from_level(log_level))
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(std::sync::Mutex::new(log_file))
                .with_ansi(false),
        )
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stdout))
        .init();
    info!("Starting Excel consolidator");
    Ok(())
}

/// Lists the spreadsheet files in the input directory, in directory order.
/// The suffix filter matches the loader's dispatch: lowercase `.xls` and
/// `.xlsx` only.
pub fn discover_files(input_path: &str) -> anyhow::Result<Vec<(PathBuf, String)>> {
    let input_dir = Path::new(input_path);
    if !input_dir.exists() {
        anyhow::bail!("Input directory '{}' does not exist", input_path);
    }
    let mut files_to_process = Vec::new();
    for entry in std::fs::read_dir(input_dir)
        .with_context(|| format!("Failed to read input directory: {}", input_path))?
    {
        let entry = entry
            .with_context(|| format!("Failed to read entry in input directory: {}", input_path))?;
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        if file_name.ends_with(".xls") || file_name.ends_with(".xlsx") {
            files_to_process.push((file_path, file_name));
        }
    }
    Ok(files_to_process)
}
