//! Icon codegen
//!
//! Assembles the generated artifacts from the parsed icon mapping:
//!
//! - `icons.json` — the raw mapping, pretty printed (two-space indent)
//! - `index.d.ts` — a `declare module` block with the `IconName` union
//! - `icons.ts`   — a const module inlining the mapping
//!
//! The string builders are pure; [`generate_icon_assets`] is the thin
//! file-writing wrapper the CLI drives.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::collect::{collect_icon_svgs, parse_icons, IconError};
use crate::svg::SvgData;

/// Output locations for the generated icon artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOutput {
    pub json: PathBuf,
    pub types: PathBuf,
    pub module: PathBuf,
}

/// Serialize the icon mapping as pretty JSON, matching the historical
/// `icons.json` asset format.
pub fn icons_json(icons: &BTreeMap<String, SvgData>) -> Result<String, IconError> {
    serde_json::to_string_pretty(icons).map_err(|e| IconError::Serialize(e.to_string()))
}

/// Build the TypeScript declaration content for the given icon names.
pub fn icon_type_declarations(names: &[String], package: &str) -> String {
    let union = names
        .iter()
        .map(|name| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "declare module \"{package}\" {{\n  \
         export type {{ IconData }} from \"./types.d.ts\";\n\n  \
         export type IconName = {union};\n\n  \
         const icons: {{ [K in IconName]: IconData }};\n\n  \
         export default icons;\n}}"
    )
}

/// Build the `icons.ts` const module with the mapping inlined.
pub fn icons_module(icons: &BTreeMap<String, SvgData>) -> Result<String, IconError> {
    let json = icons_json(icons)?;
    Ok(format!(
        "// Auto-generated file - do not edit manually\n\
         export const icons = {json} as const;\n\n\
         export type IconName = keyof typeof icons;\n"
    ))
}

/// Run the full icon pipeline: collect, parse, and write all artifacts.
///
/// Returns the number of icons generated. A collection or parse failure
/// aborts before any output file is written.
pub fn generate_icon_assets(
    assets_dir: &Path,
    output: &IconOutput,
    package: &str,
) -> Result<usize, IconError> {
    let sources = collect_icon_svgs(assets_dir)?;
    let icons = parse_icons(&sources)?;

    let names: Vec<String> = icons.keys().cloned().collect();
    let json = icons_json(&icons)?;
    let types = icon_type_declarations(&names, package);
    let module = icons_module(&icons)?;

    write_artifact(&output.json, &json)?;
    write_artifact(&output.types, &types)?;
    write_artifact(&output.module, &module)?;

    Ok(icons.len())
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), IconError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IconError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    fs::write(path, contents).map_err(|e| IconError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
