//! Token formatting
//!
//! Flattens a token tree into the three pieces the output files are built
//! from: a banner header naming the group, CSS custom-property
//! declarations, and JS constant exports.
//!
//! Naming: CSS variables are
//! `--nds-{device}-{group}-{path}` with kebab-cased segments; JS constants
//! are `{DEVICE}_{GROUP}_{PATH}` with upper snake-cased segments. A
//! camelCase key like `extraSmall` becomes `extra-small` / `EXTRA_SMALL`.

use crate::device::Device;
use crate::value::TokenTree;

/// Prefix for every generated CSS custom property.
pub const VAR_PREFIX: &str = "nds";

const FILE_BANNER: &str =
    "/*\n  NDS Design Tokens\n  THIS FILE IS AUTO-GENERATED. DO NOT EDIT MANUALLY.\n*/";

/// One formatted token group (possibly spanning several devices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTokens {
    /// Banner comment naming the group; empty when the group was formatted
    /// without a header (non-first device).
    pub header: String,
    pub css_vars: Vec<String>,
    pub js_exports: Vec<String>,
}

impl FormattedTokens {
    /// The complete stylesheet containing just this group.
    pub fn css(&self) -> String {
        wrap_css(std::slice::from_ref(self))
    }

    /// The complete JS module containing just this group.
    pub fn js(&self) -> String {
        wrap_js(std::slice::from_ref(self))
    }
}

/// Flatten one token tree for one device.
pub fn format_tokens(
    tokens: &TokenTree,
    group: &str,
    device: Device,
    include_header: bool,
) -> FormattedTokens {
    let header = if include_header {
        group_header(group)
    } else {
        String::new()
    };

    let mut css_vars = Vec::new();
    let mut js_exports = Vec::new();
    for (path, value) in tokens.flatten() {
        let mut css_segments = vec![
            VAR_PREFIX.to_string(),
            device.name().to_string(),
            kebab_case(group),
        ];
        css_segments.extend(path.iter().map(|key| kebab_case(key)));
        css_vars.push(format!("--{}: {};", css_segments.join("-"), value.css()));

        let mut js_segments = vec![
            device.name().to_ascii_uppercase(),
            upper_snake_case(group),
        ];
        js_segments.extend(path.iter().map(|key| upper_snake_case(key)));
        js_exports.push(format!(
            "export const {} = {};",
            js_segments.join("_"),
            value.js()
        ));
    }

    FormattedTokens {
        header,
        css_vars,
        js_exports,
    }
}

/// Assemble the complete stylesheet: banner, then a single `:root` block
/// holding every group's header comment and variables.
pub fn wrap_css(groups: &[FormattedTokens]) -> String {
    let mut out = String::new();
    out.push_str(FILE_BANNER);
    out.push_str("\n\n:root {\n");
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for line in group.header.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        for var in &group.css_vars {
            out.push_str("  ");
            out.push_str(var);
            out.push('\n');
        }
    }
    out.push_str("}\n");
    out
}

/// Assemble the complete JS module: banner, then each group's header and
/// exports.
pub fn wrap_js(groups: &[FormattedTokens]) -> String {
    let mut out = String::new();
    out.push_str(FILE_BANNER);
    out.push('\n');
    for group in groups {
        out.push('\n');
        if !group.header.is_empty() {
            out.push_str(&group.header);
            out.push('\n');
        }
        for export in &group.js_exports {
            out.push_str(export);
            out.push('\n');
        }
    }
    out
}

fn group_header(group: &str) -> String {
    let rule = format!("|{}", "-".repeat(77));
    format!("/*\n{rule}\n| {}\n{rule}\n*/", title_case(group))
}

/// `font_size` → `Font size`
fn title_case(group: &str) -> String {
    let spaced = group.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `extraSmall` → `extra-small`, `font_size` → `font-size`
fn kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c == '_' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// `extraSmall` → `EXTRA_SMALL`
fn upper_snake_case(s: &str) -> String {
    kebab_case(s).replace('-', "_").to_ascii_uppercase()
}
