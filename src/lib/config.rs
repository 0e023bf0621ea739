use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: String,
    pub output_dir: String,
    pub log_level: tracing::Level,
}

const INPUT_DIR_KEY: &str = "INPUT_DIR";
const OUTPUT_DIR_KEY: &str = "OUTPUT_DIR";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

const DEFAULT_INPUT_DIR: &str = "input";
const DEFAULT_OUTPUT_DIR: &str = "output";

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let input_dir =
            std::env::var(INPUT_DIR_KEY).unwrap_or_else(|_| DEFAULT_INPUT_DIR.to_string());
        let output_dir =
            std::env::var(OUTPUT_DIR_KEY).unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());
        let log_level = match std::env::var(LOG_LEVEL_KEY) {
            Ok(value) => tracing::Level::from_str(&value)?,
            Err(_) => tracing::Level::INFO,
        };

        Ok(Self {
            input_dir,
            output_dir,
            log_level,
        })
    }
}
