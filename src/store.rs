use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};
use responder::Responder;

use crate::config::Config;

fn config_file_path() -> PathBuf {
    data_dir().join("config.yaml")
}

pub fn data_dir() -> PathBuf {
    let project_dirs = directories::ProjectDirs::from("com", "hotline", "hotline")
        .expect("Cannot retrieve project dirs");
    project_dirs.data_dir().to_owned()
}

pub fn load_config() -> Result<Config> {
    info!("Config file: {}", config_file_path().to_string_lossy());
    if !config_file_path().exists() {
        info!("Config file does not exist, creating.");
        store_default_config()?;
    }
    let config_file = File::open(config_file_path())?;
    Ok(serde_yaml::from_reader(config_file)?)
}

pub fn store_default_config() -> Result<()> {
    ensure_dir_created(&config_file_path())?;
    let config_file = File::create(&config_file_path())?;
    Ok(serde_yaml::to_writer(config_file, &Config::default())?)
}

/// Builds the responder from the configured resources. Missing resources
/// only degrade the tables, so this cannot fail; the counts land in the log
/// for diagnosis.
pub fn load_responder(config: &Config) -> Responder {
    info!("Responses file: {}", config.responses_file.to_string_lossy());
    info!(
        "Default responses file: {}",
        config.default_responses_file.to_string_lossy()
    );
    let responder = Responder::from_files(&config.responses_file, &config.default_responses_file);

    let n = responder.response_map().len();
    if n == 0 {
        warn!("Loaded {n} keywords");
    } else {
        let keywords: String = responder.response_map().keywords().sorted().join(", ");
        info!("Loaded {n} keywords: {keywords}");
    }
    let n = responder.default_responses().len();
    if n == 0 {
        warn!("Loaded {n} default responses");
    } else {
        info!("Loaded {n} default responses");
    }
    responder
}

fn ensure_dir_created(path: &Path) -> Result<()> {
    let dir = path.parent().expect("Parent directory");
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create {}", &dir.to_string_lossy()))?;
    }
    Ok(())
}
