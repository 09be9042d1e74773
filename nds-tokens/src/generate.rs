//! Token output generation
//!
//! Fans out every registered group over every device (header from the
//! first device only, so each group appears once with all its per-device
//! blocks underneath) and writes the combined CSS and JS files. The `.ts`
//! file repeats the JS content so downstream type generation has a
//! TypeScript source to compile.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::definitions::token_groups;
use crate::device::{BaseUnits, Device};
use crate::format::{format_tokens, wrap_css, wrap_js, FormattedTokens};

/// Output file names, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenFiles {
    pub css: String,
    pub js: String,
    pub ts: String,
}

impl Default for TokenFiles {
    fn default() -> Self {
        TokenFiles {
            css: "nds_tokens.css".to_string(),
            js: "nds_tokens.js".to_string(),
            ts: "nds_tokens.ts".to_string(),
        }
    }
}

/// Errors raised by token generation.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    Write { path: PathBuf, message: String },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Write { path, message } => {
                write!(f, "failed to write {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for TokenError {}

/// Generate the token output files.
///
/// Returns the generated group names, in output order. The output
/// directory is created if missing; any write failure aborts the run.
pub fn generate_tokens(
    base_units: &BaseUnits,
    output_dir: &Path,
    files: &TokenFiles,
) -> Result<Vec<&'static str>, TokenError> {
    let groups = token_groups();

    let mut formatted: Vec<FormattedTokens> = Vec::with_capacity(groups.len());
    for group in &groups {
        let mut combined = FormattedTokens {
            header: String::new(),
            css_vars: Vec::new(),
            js_exports: Vec::new(),
        };
        for (i, device) in Device::ALL.iter().copied().enumerate() {
            let tree = (group.build)(base_units.get(device));
            let device_tokens = format_tokens(&tree, group.name, device, i == 0);
            if i == 0 {
                combined.header = device_tokens.header;
            }
            combined.css_vars.extend(device_tokens.css_vars);
            combined.js_exports.extend(device_tokens.js_exports);
        }
        formatted.push(combined);
    }

    let css = wrap_css(&formatted);
    let js = wrap_js(&formatted);

    fs::create_dir_all(output_dir).map_err(|e| TokenError::Write {
        path: output_dir.to_path_buf(),
        message: e.to_string(),
    })?;
    write_output(&output_dir.join(&files.css), &css)?;
    write_output(&output_dir.join(&files.js), &js)?;
    write_output(&output_dir.join(&files.ts), &js)?;

    Ok(groups.iter().map(|group| group.name).collect())
}

fn write_output(path: &Path, contents: &str) -> Result<(), TokenError> {
    fs::write(path, contents).map_err(|e| TokenError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
