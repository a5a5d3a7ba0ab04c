//! Text-to-figure parser
//!
//! Turns a whitespace-delimited description such as `"rectangle 10 20"` into
//! a validated [`Figure`]. The kind keyword is matched case-insensitively;
//! every following token must parse as an `f64` and the token count must
//! match the kind's arity exactly.

use tracing::{debug, span, trace, warn, Level};

use super::error::{FigureError, Result};
use super::figure::Figure;
use super::text::tokens;
use super::types::FigureKind;

/// Parser for the textual figure format
#[derive(Debug, Default, Clone, Copy)]
pub struct FigureParser;

impl FigureParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one figure description
    ///
    /// Errors are, in order of checking: unknown kind, wrong parameter
    /// count, non-numeric token, then whatever the figure constructor
    /// rejects.
    pub fn parse(&self, input: &str) -> Result<Figure> {
        let parse_span = span!(Level::DEBUG, "parse_figure", input_len = input.len());
        let _enter = parse_span.enter();

        let mut tokens = tokens(input);
        let kind_token = tokens.next().unwrap_or_default();
        let kind = kind_token.parse::<FigureKind>().inspect_err(|_| {
            warn!(kind = kind_token, "Unknown figure kind");
        })?;

        let raw: Vec<&str> = tokens.collect();
        trace!(%kind, params = raw.len(), "Tokenized figure description");

        if raw.len() != kind.arity() {
            debug!(%kind, expected = kind.arity(), found = raw.len(), "Arity mismatch");
            return Err(FigureError::ParseArityMismatch {
                kind: kind.keyword(),
                expected: kind.arity_description(),
                found: raw.len(),
            });
        }

        let params = raw
            .into_iter()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| FigureError::not_numeric(token))
            })
            .collect::<Result<Vec<f64>>>()?;

        let figure = Figure::from_params(kind, &params)?;
        debug!(%figure, "Parsed figure");
        Ok(figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_kind() {
        let parser = FigureParser::new();
        assert_eq!(parser.parse("triangle 3 4 5").unwrap().kind(), FigureKind::Triangle);
        assert_eq!(parser.parse("Circle 1.5").unwrap().kind(), FigureKind::Circle);
        assert_eq!(parser.parse("RECTANGLE 2 3e2").unwrap().params(), vec![2.0, 300.0]);
    }

    #[test]
    fn test_arity_mismatch_names_expected_count() {
        let err = FigureParser::new().parse("rectangle 4.0").unwrap_err();
        assert!(matches!(err, FigureError::ParseArityMismatch { found: 1, .. }));
        assert!(err.to_string().contains("two parameters expected"));
    }

    #[test]
    fn test_non_numeric_names_token() {
        let err = FigureParser::new().parse("circle abc").unwrap_err();
        assert!(matches!(err, FigureError::ParseTokenNotNumeric { ref token } if token == "abc"));
    }

    #[test]
    fn test_unknown_kind() {
        let err = FigureParser::new().parse("hexagon 5").unwrap_err();
        assert!(matches!(err, FigureError::UnknownFigureKind { ref kind } if kind == "hexagon"));
    }

    #[test]
    fn test_empty_input_is_unknown_kind() {
        assert!(matches!(
            FigureParser::new().parse("   "),
            Err(FigureError::UnknownFigureKind { .. })
        ));
    }

    #[test]
    fn test_inf_and_nan_fail_validation() {
        assert!(matches!(
            FigureParser::new().parse("circle inf"),
            Err(FigureError::InvalidParameter { .. })
        ));
        assert!(matches!(
            FigureParser::new().parse("rectangle 1 NaN"),
            Err(FigureError::InvalidParameter { field: "height", .. })
        ));
    }

    #[test]
    fn test_constructor_errors_propagate() {
        assert!(matches!(
            FigureParser::new().parse("triangle 1 2 10"),
            Err(FigureError::GeometricConstraintViolation { .. })
        ));
    }

    #[test]
    fn test_vertical_tab_is_part_of_a_token() {
        assert!(matches!(
            FigureParser::new().parse("rectangle 1\x0b2 3"),
            Err(FigureError::ParseTokenNotNumeric { ref token }) if token == "1\x0b2"
        ));
        assert_eq!(
            FigureParser::new().parse("rectangle\t1\r\n2\x0c").unwrap().to_string(),
            "Rectangle 1 2"
        );
    }
}
