use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::config::proc_loader::expand_env_vars;

/// A peer service this one is allowed to call
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Dep {
    #[serde(rename = "depName")]
    pub dep_name: String,
    #[serde(rename = "depRootDomain")]
    pub dep_root_domain: String,
}

impl Dep {
    pub fn new(name: impl Into<String>, root_domain: impl Into<String>) -> Self {
        Self {
            dep_name: name.into(),
            dep_root_domain: root_domain.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DepsFile {
    #[serde(default)]
    deps: Vec<Dep>,
}

/// First dependency named `name`, if any.
pub fn get_dep_from_config<'a>(name: &str, deps: &'a [Dep]) -> Option<&'a Dep> {
    deps.iter().find(|dep| dep.dep_name == name)
}

/// Read a standalone `deps:` YAML file.
pub fn load_deps_from_yaml(path: &Path) -> Result<Vec<Dep>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("unable to read deps file {}", path.display()))?;
    let file: DepsFile = serde_yaml::from_str(&expand_env_vars(&content))
        .with_context(|| format!("unable to parse deps file {}", path.display()))?;
    debug!("loaded {} dependencies from {}", file.deps.len(), path.display());
    Ok(file.deps)
}
