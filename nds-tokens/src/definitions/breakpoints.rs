//! Viewport breakpoints
//!
//! Widths are fixed per design, so the device base unit is ignored. The
//! semantic aliases point at the base scale rather than repeating values.

use crate::units::px;
use crate::value::TokenTree;

pub fn tokens(_base_unit: f64) -> TokenTree {
    TokenTree::group(vec![
        (
            "base",
            TokenTree::group(vec![
                ("extraSmall", TokenTree::text(px(0.0))),
                ("small", TokenTree::text(px(768.0))),
                ("medium", TokenTree::text(px(1024.0))),
                ("large", TokenTree::text(px(1360.0))),
                ("extraLarge", TokenTree::text(px(1920.0))),
            ]),
        ),
        (
            "semantic",
            TokenTree::group(vec![
                ("phone", TokenTree::text(px(768.0))),
                ("tablet", TokenTree::text(px(1024.0))),
                ("desktop", TokenTree::text(px(1360.0))),
            ]),
        ),
    ])
}
