//! Token definitions
//!
//! One module per token group, each exposing `tokens(base_unit)`. The
//! registry below fixes the group order in the generated files; names are
//! already snake_case because they become both CSS and JS identifiers.

pub mod breakpoints;
pub mod color;
pub mod font_size;

use crate::value::TokenTree;

/// A registered token group.
pub struct TokenGroup {
    pub name: &'static str,
    pub build: fn(f64) -> TokenTree,
}

/// All token groups, in output order.
pub fn token_groups() -> Vec<TokenGroup> {
    vec![
        TokenGroup {
            name: "breakpoints",
            build: breakpoints::tokens,
        },
        TokenGroup {
            name: "color",
            build: color::tokens,
        },
        TokenGroup {
            name: "font_size",
            build: font_size::tokens,
        },
    ]
}
