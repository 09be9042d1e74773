//! Token value model
//!
//! A token group is an ordered tree: groups hold named children in
//! insertion order, leaves hold a text or numeric value. Insertion order is
//! load bearing because the generated files keep the declaration order of
//! the definitions.

/// A single token value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Emitted as-is in CSS, quoted in JS.
    Text(String),
    /// Emitted bare in both CSS and JS.
    Number(f64),
}

impl TokenValue {
    /// Render the value for a CSS custom-property declaration.
    pub fn css(&self) -> String {
        match self {
            TokenValue::Text(s) => s.clone(),
            TokenValue::Number(n) => crate::units::fmt(*n),
        }
    }

    /// Render the value for a JS export statement.
    pub fn js(&self) -> String {
        match self {
            TokenValue::Text(s) => {
                format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
            TokenValue::Number(n) => crate::units::fmt(*n),
        }
    }
}

/// An ordered tree of token values.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenTree {
    Leaf(TokenValue),
    Group(Vec<(String, TokenTree)>),
}

impl TokenTree {
    pub fn text(value: impl Into<String>) -> Self {
        TokenTree::Leaf(TokenValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        TokenTree::Leaf(TokenValue::Number(value))
    }

    pub fn group(entries: Vec<(&str, TokenTree)>) -> Self {
        TokenTree::Group(
            entries
                .into_iter()
                .map(|(key, child)| (key.to_string(), child))
                .collect(),
        )
    }

    /// Flatten the tree into `(path, value)` pairs in declaration order.
    pub fn flatten(&self) -> Vec<(Vec<String>, &TokenValue)> {
        let mut out = Vec::new();
        self.walk(&mut Vec::new(), &mut out);
        out
    }

    fn walk<'a>(&'a self, path: &mut Vec<String>, out: &mut Vec<(Vec<String>, &'a TokenValue)>) {
        match self {
            TokenTree::Leaf(value) => out.push((path.clone(), value)),
            TokenTree::Group(entries) => {
                for (key, child) in entries {
                    path.push(key.clone());
                    child.walk(path, out);
                    path.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_preserves_declaration_order() {
        let tree = TokenTree::group(vec![
            ("b", TokenTree::text("1")),
            (
                "a",
                TokenTree::group(vec![
                    ("inner", TokenTree::number(2.0)),
                    ("other", TokenTree::text("3")),
                ]),
            ),
        ]);

        let flat: Vec<Vec<String>> = tree.flatten().into_iter().map(|(path, _)| path).collect();
        assert_eq!(
            flat,
            vec![
                vec!["b".to_string()],
                vec!["a".to_string(), "inner".to_string()],
                vec!["a".to_string(), "other".to_string()],
            ]
        );
    }

    #[test]
    fn text_values_are_quoted_in_js_only() {
        let value = TokenValue::Text("#ffffff".to_string());
        assert_eq!(value.css(), "#ffffff");
        assert_eq!(value.js(), "\"#ffffff\"");
    }

    #[test]
    fn numbers_are_emitted_bare() {
        let value = TokenValue::Number(400.0);
        assert_eq!(value.css(), "400");
        assert_eq!(value.js(), "400");
    }

    #[test]
    fn js_rendering_escapes_quotes() {
        let value = TokenValue::Text("'IBM Plex Sans', \"sans-serif\"".to_string());
        assert_eq!(value.js(), "\"'IBM Plex Sans', \\\"sans-serif\\\"\"");
    }
}
