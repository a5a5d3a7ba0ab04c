//! Stream figure source
//!
//! Reads figures token by token from any [`BufRead`]. Only the bytes of the
//! tokens it needs are consumed, so the same reader can be handed back to
//! other code once the source is dropped.

use std::io::{self, BufRead};

use tracing::{debug, trace};

use super::FigureSource;
use crate::core::{is_separator, Figure, FigureError, FigureKind, FigureParser, Result};

/// Source that parses figures from a character stream
pub struct StreamFigureSource<R> {
    reader: R,
    parser: FigureParser,
}

impl<R: BufRead> StreamFigureSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            parser: FigureParser::new(),
        }
    }

    /// Give the underlying reader back
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the next whitespace-delimited token, or `None` at end of stream
    fn next_token(&mut self) -> Result<Option<String>> {
        let mut token = Vec::new();

        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                if is_separator(byte) {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            self.reader.consume(used);

            if complete {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }

        // Invalid UTF-8 is kept lossily so the parser names the bad token
        let token = String::from_utf8(token)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
        Ok(Some(token))
    }
}

impl<R: BufRead> FigureSource for StreamFigureSource<R> {
    fn create(&mut self) -> Result<Option<Figure>> {
        let Some(kind_token) = self.next_token()? else {
            debug!("Stream exhausted, no more figures");
            return Ok(None);
        };

        let kind: FigureKind = kind_token.parse()?;
        let mut record = kind_token;

        for index in 1..=kind.arity() {
            let value = self
                .next_token()?
                .ok_or(FigureError::StreamExhaustedMidRecord {
                    kind: kind.keyword(),
                    index,
                })?;
            record.push(' ');
            record.push_str(&value);
        }

        trace!(record = %record, "Read figure record");
        self.parser.parse(&record).map(Some)
    }

    fn name(&self) -> &'static str {
        "stream"
    }
}

impl<R: BufRead> Iterator for StreamFigureSource<R> {
    type Item = Result<Figure>;

    fn next(&mut self) -> Option<Self::Item> {
        self.create().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn source(input: &str) -> StreamFigureSource<Cursor<&[u8]>> {
        StreamFigureSource::new(Cursor::new(input.as_bytes()))
    }

    #[test]
    fn test_reads_sequentially() {
        let mut source = source("circle 5\nrectangle 10 20\ntriangle 3 4 5");

        assert_eq!(source.create().unwrap().unwrap().to_string(), "Circle 5");
        assert_eq!(source.create().unwrap().unwrap().to_string(), "Rectangle 10 20");
        assert_eq!(source.create().unwrap().unwrap().to_string(), "Triangle 3 4 5");
        assert!(source.create().unwrap().is_none());
    }

    #[test]
    fn test_records_may_span_lines() {
        let mut source = source("  TRIANGLE\n3\t4\n\n 5  ");
        assert_eq!(source.create().unwrap().unwrap().to_string(), "Triangle 3 4 5");
        assert!(source.create().unwrap().is_none());
    }

    #[test]
    fn test_whitespace_only_is_end_of_stream() {
        assert!(source(" \n\t ").create().unwrap().is_none());
        assert!(source("").create().unwrap().is_none());
    }

    #[test]
    fn test_missing_parameter_is_an_error() {
        let err = source("rectangle 10").create().unwrap_err();
        assert!(matches!(
            err,
            FigureError::StreamExhaustedMidRecord { kind: "rectangle", index: 2 }
        ));
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        assert!(matches!(
            source("pentagon 1 2 3 4 5").create(),
            Err(FigureError::UnknownFigureKind { .. })
        ));
    }

    #[test]
    fn test_vertical_tab_does_not_split_tokens() {
        let err = source("rectangle 1\x0b2 3").create().unwrap_err();
        match err {
            FigureError::ParseTokenNotNumeric { token } => assert_eq!(token, "1\x0b2"),
            other => panic!("Expected ParseTokenNotNumeric, got {}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_token_is_a_parse_error() {
        let mut bad_kind = StreamFigureSource::new(Cursor::new(&b"circ\xffle 1"[..]));
        match bad_kind.create() {
            Err(FigureError::UnknownFigureKind { kind }) => assert_eq!(kind, "circ\u{fffd}le"),
            other => panic!("Expected UnknownFigureKind, got {:?}", other),
        }

        let mut bad_number = StreamFigureSource::new(Cursor::new(&b"circle 1\xff"[..]));
        assert!(matches!(
            bad_number.create(),
            Err(FigureError::ParseTokenNotNumeric { .. })
        ));
    }

    #[test]
    fn test_leaves_rest_of_stream_unread() {
        let mut source = source("circle 1\nnot a figure");
        assert!(source.create().unwrap().is_some());

        let mut rest = String::new();
        source.into_inner().read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "\nnot a figure");
    }

    #[test]
    fn test_iterator_collects_until_exhausted() {
        let figures: Result<Vec<Figure>> = source("circle 1 circle 2").collect();
        assert_eq!(figures.unwrap().len(), 2);
    }
}
