//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - API credentials go through the same precondition check the client runs
//! - Inter-service key and expiry, dependency names and logging level

use std::collections::HashSet;

use tracing::{error, info};

use crate::client::conditions::check_api_client_preconditions;
use crate::config::settings::{InterServiceConfig, LoggingConfig, ServiceConfig};
use crate::isc::claims::Claims;
use crate::isc::deps::Dep;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    if let Some(credentials) = &cfg.api {
        if let Err(e) = check_api_client_preconditions(credentials) {
            errors.push(format!("api: {}", e));
        }
    }

    validate_inter_service(&cfg.inter_service, &mut errors);
    validate_deps(&cfg.deps, &mut errors);
    if let Some(logging) = &cfg.logging {
        validate_logging(logging, &mut errors);
    }

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        error!("config is not valid: {} issue(s)", errors.len());
        Err(errors)
    }
}

fn validate_inter_service(isc: &InterServiceConfig, errors: &mut Vec<String>) {
    if isc.jwt_key.trim().is_empty() {
        errors.push("inter_service.jwt_key must not be empty".to_string());
    }
    match isc.expire_minutes() {
        Ok(minutes) => {
            if let Err(e) = Claims::issued_now("", minutes) {
                errors.push(format!("inter_service.token_expire_minutes: {}", e));
            }
        }
        Err(e) => errors.push(format!("inter_service.token_expire_minutes: {}", e)),
    }
}

fn validate_deps(deps: &[Dep], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for dep in deps {
        if dep.dep_name.trim().is_empty() {
            errors.push("deps: dependency name must not be empty".to_string());
        } else if !seen.insert(dep.dep_name.as_str()) {
            errors.push(format!("deps: duplicate dependency '{}'", dep.dep_name));
        }
        if !dep.dep_root_domain.starts_with("http://") && !dep.dep_root_domain.starts_with("https://") {
            errors.push(format!(
                "deps['{}'].depRootDomain '{}' must be an http(s) URL",
                dep.dep_name, dep.dep_root_domain
            ));
        }
    }
}

fn validate_logging(logging: &LoggingConfig, errors: &mut Vec<String>) {
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        errors.push(format!(
            "logging.level '{}' must be one of {:?}",
            logging.level, LOG_LEVELS
        ));
    }
}
