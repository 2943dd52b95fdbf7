use std::path::Path;

use anyhow::{anyhow, Result};

use crate::config::proc_loader::file_to_config;
use crate::config::settings::ServiceConfig;

/// Load the YAML config at `config_path`, or build one from the
/// environment when no path is given.
pub async fn run(config_path: Option<&str>) -> Result<ServiceConfig> {
    match config_path {
        Some(path) => file_to_config(Path::new(path))
            .await
            .map_err(|e| anyhow!("Invalid config format: {}", e)),
        None => Ok(ServiceConfig::from_env()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = run(path.to_str()).await.unwrap_err();
        assert!(err.to_string().starts_with("Invalid config format"));
    }
}
