//! Font-size tokens
//!
//! All three scales are derived from the device base unit: the standard
//! scale carries the raw steps, the experimental scale holds sizes not yet
//! promoted, and the semantic scale names the roles built on the standard
//! steps.

use crate::units::px;
use crate::value::TokenTree;

pub fn tokens(base_unit: f64) -> TokenTree {
    TokenTree::group(vec![
        (
            "standard",
            TokenTree::group(vec![
                ("smaller", TokenTree::text(px(base_unit * 1.5))),
                ("small", TokenTree::text(px(base_unit * 1.75))),
                ("medium", TokenTree::text(px(base_unit * 2.0))),
                ("large", TokenTree::text(px(base_unit * 2.25))),
                ("larger", TokenTree::text(px(base_unit * 3.0))),
                ("largest", TokenTree::text(px(base_unit * 3.75))),
            ]),
        ),
        (
            "experimental",
            TokenTree::group(vec![(
                "extraSmall",
                TokenTree::text(px(base_unit * 1.25)),
            )]),
        ),
        (
            "semantic",
            TokenTree::group(vec![
                ("body", TokenTree::text(px(base_unit * 2.0))),
                ("heading4", TokenTree::text(px(base_unit * 2.25))),
                ("heading3", TokenTree::text(px(base_unit * 2.75))),
                ("heading2", TokenTree::text(px(base_unit * 3.5))),
                ("heading1", TokenTree::text(px(base_unit * 4.25))),
                ("display", TokenTree::text(px(base_unit * 8.0))),
            ]),
        ),
    ])
}
