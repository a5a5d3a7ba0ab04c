//! Tests for the text-to-figure parser

use figures::prelude::*;
use figures::parse;

const TOLERANCE: f64 = 1e-10;

#[test]
fn test_valid_descriptions() {
    let cases = [
        ("circle 5", "Circle", 10.0 * std::f64::consts::PI),
        ("Circle 0.5", "Circle", std::f64::consts::PI),
        ("rectangle 10 20", "Rectangle", 60.0),
        ("RECTANGLE 1.5 2.5", "Rectangle", 8.0),
        ("triangle 3 4 5", "Triangle", 12.0),
        ("tRiAnGlE 1e1 1e1 1e1", "Triangle", 30.0),
    ];

    for (input, name, perimeter) in cases {
        let figure = parse(input).unwrap();
        assert_eq!(figure.kind().name(), name, "{}", input);
        assert!((figure.perimeter() - perimeter).abs() < TOLERANCE, "{}", input);
    }
}

#[test]
fn test_extra_whitespace_is_ignored() {
    let figure = parse("  rectangle\t 4 \n 6  ").unwrap();
    assert_eq!(figure.to_string(), "Rectangle 4 6");
}

#[test]
fn test_arity_mismatch() {
    let cases = [
        ("rectangle 4.0", "two parameters expected"),
        ("rectangle 1 2 3", "two parameters expected"),
        ("circle", "one parameter expected"),
        ("triangle 3 4", "three parameters expected"),
    ];

    for (input, message) in cases {
        let err = parse(input).unwrap_err();
        assert!(matches!(err, FigureError::ParseArityMismatch { .. }), "{}", input);
        assert!(err.to_string().contains(message), "{}: {}", input, err);
    }
}

#[test]
fn test_non_numeric_token() {
    let err = parse("circle abc").unwrap_err();
    assert!(err.to_string().contains("abc"));

    let err = parse("triangle 3 four 5").unwrap_err();
    assert!(matches!(err, FigureError::ParseTokenNotNumeric { ref token } if token == "four"));
}

#[test]
fn test_unknown_kind() {
    for input in ["hexagon 5", "square 1 1", "circles 1"] {
        assert!(matches!(parse(input), Err(FigureError::UnknownFigureKind { .. })), "{}", input);
    }
}

#[test]
fn test_kind_is_checked_before_arity() {
    assert!(matches!(parse("hexagon"), Err(FigureError::UnknownFigureKind { .. })));
}

#[test]
fn test_arity_is_checked_before_numbers() {
    assert!(matches!(parse("circle x y"), Err(FigureError::ParseArityMismatch { .. })));
}

#[test]
fn test_constructor_rejections_surface_unchanged() {
    assert!(matches!(parse("circle 0"), Err(FigureError::InvalidParameter { .. })));
    assert!(matches!(parse("circle -inf"), Err(FigureError::InvalidParameter { .. })));
    assert!(matches!(parse("triangle 1 2 3"), Err(FigureError::GeometricConstraintViolation { .. })));
    assert!(matches!(
        parse("rectangle 1e308 1e308"),
        Err(FigureError::ArithmeticOverflow { .. })
    ));
}
