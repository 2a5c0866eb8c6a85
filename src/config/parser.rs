use std::path::Path;
use crate::errors::SimcheckError;
use super::types::SimcheckConfig;
use super::filter::build_filter;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<SimcheckConfig, SimcheckError> {
    if !path.exists() {
        return Err(SimcheckError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(SimcheckError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

/// Parse, schema-check and conflict-check a YAML config document.
pub fn parse_config_str(content: &str) -> Result<SimcheckConfig, SimcheckError> {
    // An empty file is a valid, all-defaults config
    if content.trim().is_empty() {
        return Ok(SimcheckConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: SimcheckConfig = serde_yaml::from_value(yaml)?;

    // Semantic conflict detection
    validate_conflicts(&config)?;

    debug!(
        filter = config.filter.is_some(),
        thresholds = config.thresholds.is_some(),
        "Parsed configuration"
    );
    Ok(config)
}

/// Load the config at `path`, or the defaults when no path was given.
pub async fn load_config(path: Option<&Path>) -> Result<SimcheckConfig, SimcheckError> {
    match path {
        Some(p) => parse_config(p).await,
        None => Ok(SimcheckConfig::default()),
    }
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), SimcheckError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| SimcheckError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| SimcheckError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();
        // Advisory only; typed parsing below is the hard gate
        for msg in &messages {
            warn!(validation_error = %msg, "Config schema warning");
        }
    }

    Ok(())
}

/// Detect semantic conflicts in the parsed configuration.
fn validate_conflicts(config: &SimcheckConfig) -> Result<(), SimcheckError> {
    if let Some(filter) = &config.filter {
        if filter.ranges.is_some() && filter.pattern.is_some() {
            return Err(SimcheckError::Config(
                "Filter cannot set both 'ranges' and 'pattern'".into(),
            ));
        }
        if filter.preset.is_some() && (filter.ranges.is_some() || filter.pattern.is_some()) {
            warn!("Filter preset is ignored when ranges or pattern are set");
        }
        // Surfaces bad code points and regexes at load time
        build_filter(filter)?;
    }

    if let Some(t) = &config.thresholds {
        for (name, value) in [("suspicious", t.suspicious), ("plagiarized", t.plagiarized)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(SimcheckError::Config(format!(
                    "Threshold '{}' must be within 0..=100, got {}",
                    name, value
                )));
            }
        }
        if t.suspicious > t.plagiarized {
            return Err(SimcheckError::Config(format!(
                "Threshold 'suspicious' ({}) exceeds 'plagiarized' ({})",
                t.suspicious, t.plagiarized
            )));
        }
    }

    if let Some(limits) = &config.limits {
        if limits.max_file_bytes == Some(0) {
            return Err(SimcheckError::Config("limits.max_file_bytes must be positive".into()));
        }
        if limits.max_table_cells == Some(0) {
            return Err(SimcheckError::Config("limits.max_table_cells must be positive".into()));
        }
    }

    Ok(())
}
