//! Integration tests for the rectangle factory.

use wallaby_geometry::Rectangle;

#[test]
fn test_fields_and_area() {
    let rect = Rectangle::new(10.0, 20.0);

    assert_eq!(rect.width, 10.0);
    assert_eq!(rect.height, 20.0);
    assert_eq!(rect.area(), 200.0);
}

#[test]
fn test_zero_dimension_area() {
    assert_eq!(Rectangle::new(0.0, 5.0).area(), 0.0);
    assert_eq!(Rectangle::new(5.0, 0.0).area(), 0.0);
}

#[test]
fn test_negative_dimensions_accepted() {
    // No validation by contract: the value is stored and the product is
    // computed as-is.
    let rect = Rectangle::new(-3.0, 4.0);

    assert_eq!(rect.width, -3.0);
    assert_eq!(rect.area(), -12.0);
}

#[test]
fn test_area_does_not_consume() {
    let rect = Rectangle::new(2.5, 4.0);
    assert_eq!(rect.area(), 10.0);
    assert_eq!(rect.area(), 10.0);
}
