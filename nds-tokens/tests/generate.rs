//! Integration tests for the full token generation run

use std::fs;

use nds_tokens::{generate_tokens, BaseUnits, TokenFiles};

#[test]
fn generates_all_three_output_files() {
    let out = tempfile::tempdir().unwrap();
    let groups = generate_tokens(&BaseUnits::default(), out.path(), &TokenFiles::default()).unwrap();
    assert_eq!(groups, vec!["breakpoints", "color", "font_size"]);

    let css = fs::read_to_string(out.path().join("nds_tokens.css")).unwrap();
    let js = fs::read_to_string(out.path().join("nds_tokens.js")).unwrap();
    let ts = fs::read_to_string(out.path().join("nds_tokens.ts")).unwrap();

    assert!(css.contains(":root {"));
    assert!(css.contains("THIS FILE IS AUTO-GENERATED"));
    assert_eq!(js, ts);
}

#[test]
fn css_carries_every_device_under_one_group_header() {
    let out = tempfile::tempdir().unwrap();
    generate_tokens(&BaseUnits::default(), out.path(), &TokenFiles::default()).unwrap();
    let css = fs::read_to_string(out.path().join("nds_tokens.css")).unwrap();

    // One header per group, not one per device.
    assert_eq!(css.matches("| Font size").count(), 1);

    assert!(css.contains("--nds-desktop-breakpoints-base-small: 768px;"));
    assert!(css.contains("--nds-tablet-breakpoints-base-small: 768px;"));
    assert!(css.contains("--nds-phone-breakpoints-base-small: 768px;"));
}

#[test]
fn size_tokens_scale_with_the_device_base_unit() {
    let out = tempfile::tempdir().unwrap();
    generate_tokens(&BaseUnits::default(), out.path(), &TokenFiles::default()).unwrap();
    let css = fs::read_to_string(out.path().join("nds_tokens.css")).unwrap();
    let js = fs::read_to_string(out.path().join("nds_tokens.js")).unwrap();

    assert!(css.contains("--nds-desktop-font-size-standard-medium: 16px;"));
    assert!(css.contains("--nds-phone-font-size-standard-medium: 20px;"));
    assert!(js.contains("export const DESKTOP_FONT_SIZE_STANDARD_MEDIUM = \"16px\";"));
    assert!(js.contains("export const PHONE_FONT_SIZE_STANDARD_MEDIUM = \"20px\";"));
}

#[test]
fn custom_base_units_flow_through() {
    let out = tempfile::tempdir().unwrap();
    let units = BaseUnits {
        desktop: 4.0,
        tablet: 4.0,
        phone: 4.0,
    };
    generate_tokens(&units, out.path(), &TokenFiles::default()).unwrap();
    let css = fs::read_to_string(out.path().join("nds_tokens.css")).unwrap();
    assert!(css.contains("--nds-desktop-font-size-standard-medium: 8px;"));
}

#[test]
fn output_directory_is_created_when_missing() {
    let out = tempfile::tempdir().unwrap();
    let nested = out.path().join("generated").join("tokens");
    generate_tokens(&BaseUnits::default(), &nested, &TokenFiles::default()).unwrap();
    assert!(nested.join("nds_tokens.css").exists());
}
