//! Subcommand implementations.

pub mod banks;
pub mod batch;
pub mod config;
pub mod process;
pub mod text;

use std::path::{Path, PathBuf};

use cardstmt_core::Config;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardstmt")
        .join("config.json")
}

/// Load the configuration from `--config`, or the default file if present.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<Config> {
    let config = match config_path {
        Some(path) => Config::from_file(Path::new(path))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                Config::from_file(&path)?
            } else {
                Config::default()
            }
        }
    };
    Ok(config)
}

/// Whether `path` has a `.pdf` extension, in any case.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Reject inputs that are not PDFs.
pub fn ensure_pdf(path: &Path) -> anyhow::Result<()> {
    if !is_pdf(path) {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        anyhow::bail!("Unsupported file format: {}", extension);
    }
    Ok(())
}
