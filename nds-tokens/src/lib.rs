//! # nds-tokens
//!
//! Build-time design-token generation.
//!
//! Token definitions live as ordered trees of named values, built once per
//! device from that device's base unit. The formatting layer flattens each
//! tree into CSS custom properties and JS constant exports; the generation
//! layer fans out over every registered group and device and writes the
//! combined `nds_tokens.{css,js,ts}` files.
//!
//! Structure:
//!     - [`value`]        Token value/tree model
//!     - [`units`]        Unit formatting helpers (`px`, `pct`, `fmt`, `n`)
//!     - [`device`]       Target devices and per-device base units
//!     - [`definitions`]  The token groups (breakpoints, color, font_size)
//!     - [`format`]       CSS variable / JS export formatting
//!     - [`generate`]     Output-file orchestration
//!
//! Like the icon pipeline, this is a shell-agnostic lib: nothing here
//! prints, and all output paths come from the caller.

pub mod definitions;
pub mod device;
pub mod format;
pub mod generate;
pub mod units;
pub mod value;

pub use device::{BaseUnits, Device};
pub use format::{format_tokens, wrap_css, wrap_js, FormattedTokens};
pub use generate::{generate_tokens, TokenError, TokenFiles};
pub use value::{TokenTree, TokenValue};
