//! Integration tests for the JSON encode/decode helpers.

use serde::{Deserialize, Serialize};
use wallaby_geometry::Rectangle;
use wallaby_selector::SimpleSelector;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Page {
    title: String,
    views: u64,
    tags: Vec<String>,
}

#[test]
fn test_encode_struct() {
    let page = Page {
        title: "home".to_owned(),
        views: 42,
        tags: vec!["nav".to_owned(), "footer".to_owned()],
    };

    assert_eq!(
        wallaby_json::encode(&page).unwrap(),
        r#"{"title":"home","views":42,"tags":["nav","footer"]}"#
    );
}

#[test]
fn test_encode_pretty_is_indented() {
    let rect = Rectangle::new(1.0, 2.0);
    let pretty = wallaby_json::encode_pretty(&rect).unwrap();

    assert!(pretty.contains('\n'));
    // Pretty and compact output decode to the same value.
    let reparsed: Rectangle = wallaby_json::decode(&pretty).unwrap();
    assert_eq!(reparsed, rect);
}

#[test]
fn test_decode_struct() {
    let page: Page =
        wallaby_json::decode(r#"{"title":"home","views":42,"tags":[]}"#).unwrap();

    assert_eq!(page.title, "home");
    assert_eq!(page.views, 42);
    assert!(page.tags.is_empty());
}

#[test]
fn test_round_trip_with_computed_accessor() {
    // A two-field numeric object decoded against a shape exposing a
    // computed operation: direct field reads match the original, and the
    // accessor computes from the decoded fields.
    let original = Rectangle::new(10.0, 20.0);
    let text = wallaby_json::encode(&original).unwrap();
    let decoded: Rectangle = wallaby_json::decode(&text).unwrap();

    assert_eq!(decoded.width, original.width);
    assert_eq!(decoded.height, original.height);
    assert_eq!(decoded.area(), 200.0);
}

#[test]
fn test_encode_selector_model() {
    // The selector model derives Serialize, so built selectors encode as
    // structured data for tooling.
    let selector = SimpleSelector::new()
        .element("div")
        .unwrap()
        .id("main")
        .unwrap();

    let text = wallaby_json::encode(&selector).unwrap();
    assert!(text.contains(r#""kind":"element""#));
    assert!(text.contains(r#""value":"main""#));
}

#[test]
fn test_decode_malformed_input_fails() {
    let result: Result<Page, _> = wallaby_json::decode("{not json");
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("malformed JSON input:"));
}

#[test]
fn test_decode_shape_mismatch_fails() {
    // Valid JSON that does not fit the target shape is still a decode error.
    let result: Result<Page, _> = wallaby_json::decode(r#"{"title": 3}"#);
    assert!(result.is_err());
}
