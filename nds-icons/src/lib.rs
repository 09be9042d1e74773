//! # nds-icons
//!
//! Build-time icon asset generation for the design system.
//!
//! Pipeline: icon `.svg` files → [`svg::parse_svg`] → name → [`svg::SvgData`]
//! mapping → `icons.json` plus generated TypeScript modules.
//!
//! Structure:
//!     - [`svg`]      The SVG subset extractor (viewBox + visible path data)
//!     - [`collect`]  Directory enumeration and per-file parsing
//!     - [`codegen`]  JSON / type-declaration / icon-module output
//!
//! This is a pure lib, that is, it powers the nds-cli but is shell agnostic:
//! no code here prints to std streams or reads env vars. Callers decide where
//! generated files go and how failures are reported.

pub mod codegen;
pub mod collect;
pub mod svg;

pub use codegen::{generate_icon_assets, IconOutput};
pub use collect::{collect_icon_svgs, parse_icons, IconError, IconSource};
pub use svg::{parse_svg, SvgData, SvgError};
