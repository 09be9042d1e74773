//! Icon collection
//!
//! Enumerates the icon assets directory and runs every `.svg` file through
//! the extractor, producing the ordered name → [`SvgData`] mapping consumed
//! by codegen. The icon name is the file stem; the extension filter is
//! case sensitive, so `Icon.SVG` is skipped just like any other file.
//!
//! Collection is fail fast: the first unreadable or malformed file aborts
//! the run with the icon name in the diagnostic, and no partial mapping is
//! returned.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::svg::{parse_svg, SvgData};

/// One icon read from disk, named after its file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    pub name: String,
    pub svg: String,
}

/// Errors raised by the icon pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum IconError {
    Read { path: PathBuf, message: String },
    Svg { icon: String, message: String },
    Write { path: PathBuf, message: String },
    Serialize(String),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::Read { path, message } => {
                write!(f, "failed to read {}: {}", path.display(), message)
            }
            IconError::Svg { icon, message } => write!(f, "icon '{}': {}", icon, message),
            IconError::Write { path, message } => {
                write!(f, "failed to write {}: {}", path.display(), message)
            }
            IconError::Serialize(message) => write!(f, "failed to serialize icons: {}", message),
        }
    }
}

impl std::error::Error for IconError {}

/// Read every `.svg` file in `assets_dir`, sorted by file name.
///
/// Directory read order is platform dependent, so entries are sorted to
/// keep the generated output stable.
pub fn collect_icon_svgs(assets_dir: &Path) -> Result<Vec<IconSource>, IconError> {
    let entries = fs::read_dir(assets_dir).map_err(|e| IconError::Read {
        path: assets_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IconError::Read {
            path: assets_dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("svg") {
            files.push(path);
        }
    }
    files.sort();

    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let svg = fs::read_to_string(&path).map_err(|e| IconError::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;
        sources.push(IconSource { name, svg });
    }
    Ok(sources)
}

/// Parse collected sources into the ordered icon mapping.
pub fn parse_icons(sources: &[IconSource]) -> Result<BTreeMap<String, SvgData>, IconError> {
    let mut icons = BTreeMap::new();
    for source in sources {
        let data = parse_svg(&source.svg).map_err(|e| IconError::Svg {
            icon: source.name.clone(),
            message: e.to_string(),
        })?;
        icons.insert(source.name.clone(), data);
    }
    Ok(icons)
}
