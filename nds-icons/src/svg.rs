//! SVG subset extraction
//!
//! Pulls the `viewBox` and the visible path data out of one icon SVG.
//! Pipeline: SVG string → quick-xml event stream → [`SvgData`]
//!
//! This is not an SVG renderer and not a full XML parser. Only open-tag
//! events are inspected; text nodes, comments, CDATA and close tags mutate
//! no state. The reader performs no case folding, so matching against the
//! `svg` and `path` element names is exact: icon sources with upper or
//! mixed-case element names (`<SVG>`, `<PATH>`) are treated as unknown
//! elements and contribute nothing. That is reproducible, expected behavior
//! inherited from the icon corpus, not something to correct here.

use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

/// Extracted drawing data for one icon.
///
/// `path` holds the `d` attribute of every visible `<path>` element in
/// document order; downstream consumers treat the first entry as the
/// primary shape. Serialized field names (`viewBox`, `path`) are fixed by
/// the `icons.json` asset format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgData {
    pub view_box: String,
    pub path: Vec<String>,
}

/// Errors that can occur while extracting icon data.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgError {
    /// The input could not be tokenized as tag/attribute markup (unclosed
    /// tag, unterminated attribute value, malformed attribute syntax).
    Malformed(String),
}

impl fmt::Display for SvgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgError::Malformed(msg) => write!(f, "SVG parsing error: {}", msg),
        }
    }
}

impl std::error::Error for SvgError {}

/// Parse one SVG document into its viewBox and visible path data.
///
/// A `<svg>` open tag sets the viewBox from its `viewbox` attribute,
/// falling back to the `viewBox` spelling; the lowercase spelling wins
/// unconditionally when both are present. A `<path>` open tag contributes
/// its `d` value when `d` is non-empty and `fill` is not exactly `"none"`.
/// Every other element is ignored. Malformed markup aborts with
/// [`SvgError::Malformed`]; an empty input is not an error.
///
/// # Examples
///
/// ```
/// use nds_icons::svg::parse_svg;
///
/// let data = parse_svg(r#"<svg viewBox="0 0 24 24"><path d="M12 2"/></svg>"#).unwrap();
/// assert_eq!(data.view_box, "0 0 24 24");
/// assert_eq!(data.path, vec!["M12 2"]);
/// ```
pub fn parse_svg(svg: &str) -> Result<SvgData, SvgError> {
    let mut reader = Reader::from_str(svg);
    let config = reader.config_mut();
    config.trim_text(true);
    config.check_end_names = true;

    let mut view_box = String::new();
    let mut paths: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) | Ok(Event::Empty(tag)) => match tag.name().as_ref() {
                b"svg" => {
                    let attrs = tag_attributes(&tag)?;
                    // Each svg open tag overwrites the accumulator, so the
                    // last root wins in the degenerate multi-root case.
                    view_box = lookup(&attrs, &["viewbox", "viewBox"])
                        .unwrap_or("")
                        .to_string();
                }
                b"path" => {
                    let attrs = tag_attributes(&tag)?;
                    let fill = lookup(&attrs, &["fill"]);
                    if let Some(d) = lookup(&attrs, &["d"]) {
                        // Deny on the exact string "none" only; absent,
                        // empty or colored fills are all visible.
                        if !d.is_empty() && fill != Some("none") {
                            paths.push(d.to_string());
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(SvgError::Malformed(e.to_string())),
        }
    }

    Ok(SvgData {
        view_box,
        path: paths,
    })
}

/// Materialize the tag's attribute mapping. Attribute syntax errors
/// surface as [`SvgError::Malformed`] rather than being skipped.
fn tag_attributes(tag: &BytesStart<'_>) -> Result<Vec<(String, String)>, SvgError> {
    let mut attrs = Vec::new();
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| SvgError::Malformed(e.to_string()))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| SvgError::Malformed(e.to_string()))?
            .into_owned();
        attrs.push((name, value));
    }
    Ok(attrs)
}

/// Ordered attribute lookup: the first candidate name that is present wins,
/// even when its value is empty.
fn lookup<'a>(attrs: &'a [(String, String)], names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6v2z"/><path d="M0 0h24v24H0z" fill="none"/></svg>"#;

    #[test]
    fn extracts_view_box_and_visible_paths() {
        let data = parse_svg(TEST_SVG).unwrap();
        assert_eq!(data.view_box, "0 0 24 24");
        assert_eq!(data.path, vec!["M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6v2z"]);
    }

    #[test]
    fn extracts_view_box_from_lowercase_attribute() {
        let data = parse_svg(r#"<svg viewbox="0 0 24 24"><path d="M12 2"/></svg>"#).unwrap();
        assert_eq!(data.view_box, "0 0 24 24");
        assert_eq!(data.path, vec!["M12 2"]);
    }

    #[test]
    fn extracts_view_box_from_camel_case_attribute() {
        let data = parse_svg(r#"<svg viewBox="0 0 24 24"><path d="M12 2"/></svg>"#).unwrap();
        assert_eq!(data.view_box, "0 0 24 24");
    }

    #[test]
    fn prefers_lowercase_viewbox_over_camel_case() {
        let data =
            parse_svg(r#"<svg viewbox="0 0 16 16" viewBox="0 0 24 24"><path d="M12 2"/></svg>"#)
                .unwrap();
        assert_eq!(data.view_box, "0 0 16 16");
    }

    #[test]
    fn empty_lowercase_viewbox_still_counts_as_present() {
        let data = parse_svg(r#"<svg viewbox="" viewBox="0 0 24 24"/>"#).unwrap();
        assert_eq!(data.view_box, "");
    }

    #[test]
    fn missing_view_box_is_empty() {
        let data = parse_svg(r#"<svg><path d="M12 2"/></svg>"#).unwrap();
        assert_eq!(data.view_box, "");
        assert_eq!(data.path, vec!["M12 2"]);
    }

    #[test]
    fn no_svg_element_yields_empty_view_box() {
        let data = parse_svg(r#"<g><path d="M1 1"/></g>"#).unwrap();
        assert_eq!(data.view_box, "");
        assert_eq!(data.path, vec!["M1 1"]);
    }

    #[test]
    fn last_svg_root_wins() {
        let data =
            parse_svg(r#"<svg viewbox="0 0 1 1"></svg><svg viewbox="0 0 2 2"></svg>"#).unwrap();
        assert_eq!(data.view_box, "0 0 2 2");

        // A later svg without any viewBox resets the field.
        let data = parse_svg(r#"<svg viewbox="0 0 1 1"></svg><svg></svg>"#).unwrap();
        assert_eq!(data.view_box, "");
    }

    #[test]
    fn includes_path_without_fill() {
        let data = parse_svg(r#"<svg><path d="M12 2"/></svg>"#).unwrap();
        assert_eq!(data.path, vec!["M12 2"]);
    }

    #[test]
    fn includes_path_with_colored_fill() {
        let data = parse_svg(r#"<svg><path d="M12 2" fill="currentColor"/></svg>"#).unwrap();
        assert_eq!(data.path, vec!["M12 2"]);
    }

    #[test]
    fn includes_path_with_empty_fill() {
        let data = parse_svg(r#"<svg><path d="M12 2" fill=""/></svg>"#).unwrap();
        assert_eq!(data.path, vec!["M12 2"]);
    }

    #[test]
    fn excludes_path_with_fill_none() {
        let data = parse_svg(r#"<svg><path d="M12 2" fill="none"/></svg>"#).unwrap();
        assert!(data.path.is_empty());
    }

    #[test]
    fn fill_none_is_an_exact_match_not_a_prefix() {
        let data = parse_svg(r#"<svg><path d="M12 2" fill="nonexistent"/></svg>"#).unwrap();
        assert_eq!(data.path, vec!["M12 2"]);
    }

    #[test]
    fn excludes_path_with_empty_d() {
        let data = parse_svg(r#"<svg><path d=""/></svg>"#).unwrap();
        assert!(data.path.is_empty());
    }

    #[test]
    fn excludes_path_with_missing_d() {
        let data = parse_svg(r#"<svg><path fill="currentColor"/></svg>"#).unwrap();
        assert!(data.path.is_empty());
    }

    #[test]
    fn preserves_document_order_across_the_filter() {
        let data =
            parse_svg(r#"<svg><path d="A"/><path d="B" fill="none"/><path d="C"/></svg>"#).unwrap();
        assert_eq!(data.path, vec!["A", "C"]);
    }

    #[test]
    fn handles_multiple_paths_with_mixed_fill_values() {
        let svg = r#"
        <svg viewBox="0 0 24 24">
          <path d="M12 2" fill="currentColor"/>
          <path d="M0 0h24v24H0z" fill="none"/>
          <path d="M6 6"/>
          <path d="M8 8" fill="red"/>
        </svg>
      "#;
        let data = parse_svg(svg).unwrap();
        assert_eq!(data.view_box, "0 0 24 24");
        assert_eq!(data.path, vec!["M12 2", "M6 6", "M8 8"]);
    }

    #[test]
    fn ignores_non_path_elements_entirely() {
        let svg = r#"
        <svg viewBox="0 0 24 24">
          <circle cx="12" cy="12" r="10" d="M9 9"/>
          <path d="M12 2"/>
          <rect x="2" y="2" width="20" height="20" fill="none"/>
        </svg>
      "#;
        let data = parse_svg(svg).unwrap();
        assert_eq!(data.view_box, "0 0 24 24");
        assert_eq!(data.path, vec!["M12 2"]);
    }

    #[test]
    fn ignores_namespace_prefixed_elements() {
        let data =
            parse_svg(r#"<svg viewBox="0 0 8 8"><x:path d="M1 1"/></svg>"#).unwrap();
        assert_eq!(data.view_box, "0 0 8 8");
        assert!(data.path.is_empty());
    }

    #[test]
    fn mixed_case_element_names_do_not_match() {
        let data = parse_svg(r#"<SVG viewBox="0 0 24 24"><PATH d="M12 2"/></SVG>"#).unwrap();
        assert_eq!(data.view_box, "");
        assert!(data.path.is_empty());
    }

    #[test]
    fn handles_multiline_markup_with_attribute_whitespace() {
        let svg = "\n<svg \n  viewBox=\"0 0 24 24\"\n  xmlns=\"http://www.w3.org/2000/svg\"\n>\n  <path \n    d=\"M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2z\"\n    fill=\"currentColor\"\n  />\n</svg>\n";
        let data = parse_svg(svg).unwrap();
        assert_eq!(data.view_box, "0 0 24 24");
        assert_eq!(
            data.path,
            vec!["M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2z"]
        );
    }

    #[test]
    fn unescapes_entities_in_attribute_values() {
        let data = parse_svg(r#"<svg><path d="M1 1 &amp; M2 2"/></svg>"#).unwrap();
        assert_eq!(data.path, vec!["M1 1 & M2 2"]);
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let data = parse_svg("").unwrap();
        assert_eq!(data.view_box, "");
        assert!(data.path.is_empty());
    }

    #[test]
    fn unclosed_tag_is_a_parse_error() {
        let err = parse_svg(r#"<svg><path d="M12 2"></svg>"#).unwrap_err();
        assert!(err.to_string().contains("SVG parsing error"));
    }

    #[test]
    fn unterminated_attribute_value_is_a_parse_error() {
        let err = parse_svg(r#"<svg><path d="M12 2></svg>"#).unwrap_err();
        assert!(err.to_string().contains("SVG parsing error"));
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = parse_svg(TEST_SVG).unwrap();
        let second = parse_svg(TEST_SVG).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_with_the_asset_field_names() {
        let data = parse_svg(TEST_SVG).unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["viewBox"], "0 0 24 24");
        assert!(json["path"].is_array());
    }
}
