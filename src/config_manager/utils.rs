use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use tracing::debug;

/// Read a configuration file and replace `${VAR_NAME}` with environment values
pub fn read_config_text(config_path: &str) -> Result<String> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path);
    }

    substitute_env_vars(&content)
}

/// Replace `${VAR_NAME}` with the variable's value, leaving unset ones as-is
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &Captures<'_>| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Load a text file, honouring a byte order mark when one is present
pub fn load_text_file(file_path: &str) -> Result<String> {
    let bytes = fs::read(file_path)
        .with_context(|| format!("Failed to read configuration file: {}", file_path))?;

    let encoding = match encoding_rs::Encoding::for_bom(&bytes) {
        Some((encoding, _bom_len)) => encoding,
        None => encoding_rs::UTF_8,
    };
    debug!("Decoding {} as {}", file_path, encoding.name());

    // decode() strips the BOM itself
    let (content, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        anyhow::bail!("Configuration file is not valid {}: {}", encoding.name(), file_path);
    }

    Ok(content.into_owned())
}
