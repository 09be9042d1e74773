//! Color tokens
//!
//! Base palette plus the categorical palette used by data visualization.
//! Colors do not scale with the device, so the base unit is ignored.

use crate::value::TokenTree;

pub fn tokens(_base_unit: f64) -> TokenTree {
    TokenTree::group(vec![
        (
            "base",
            TokenTree::group(vec![
                ("white", TokenTree::text("#FFFFFF")),
                ("whiteGrey", TokenTree::text("#F0F2F5")),
                ("lightGrey", TokenTree::text("#E4E7EB")),
                ("grey", TokenTree::text("#C0C8D1")),
                ("darkGrey", TokenTree::text("#6B7786")),
                ("black", TokenTree::text("#011E38")),
                ("lightBlue", TokenTree::text("#E1EBFA")),
                ("blue", TokenTree::text("#216BEB")),
                ("darkBlue", TokenTree::text("#123A78")),
                ("lightRed", TokenTree::text("#FAE6EA")),
                ("red", TokenTree::text("#CC1439")),
                ("lightGreen", TokenTree::text("#E2F7EC")),
                ("green", TokenTree::text("#00823B")),
                ("lightYellow", TokenTree::text("#FCF5E2")),
                ("yellow", TokenTree::text("#F4BE49")),
            ]),
        ),
        (
            "categorical",
            TokenTree::group(vec![
                ("categorical1", TokenTree::text("#216BEB")),
                ("categorical2", TokenTree::text("#00A2A2")),
                ("categorical3", TokenTree::text("#8B5CE4")),
                ("categorical4", TokenTree::text("#E5669B")),
                ("categorical5", TokenTree::text("#C98811")),
                ("categorical6", TokenTree::text("#6B7786")),
            ]),
        ),
    ])
}
