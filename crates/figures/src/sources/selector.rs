//! Input method selection
//!
//! Maps the tokens a user typed (`random`, `stdin`, `file <path>`) to a
//! concrete [`FigureSource`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::{FigureSource, RandomFigureSource, StreamFigureSource};
use crate::core::{FigureError, Result};

/// A validated choice of where figures come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMethod {
    Random,
    Stdin,
    File(PathBuf),
}

impl InputMethod {
    /// Interpret input-method tokens
    ///
    /// Returns `Ok(None)` when no tokens were given at all.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Option<Self>> {
        let Some((first, rest)) = tokens.split_first() else {
            debug!("No input method given");
            return Ok(None);
        };

        let method = match first.as_ref() {
            "random" => InputMethod::Random,
            "stdin" => InputMethod::Stdin,
            "file" => match rest {
                [path] => InputMethod::File(PathBuf::from(path.as_ref())),
                _ => {
                    return Err(FigureError::BadArgumentCount {
                        method: "file",
                        expected: 1,
                        found: rest.len(),
                    })
                }
            },
            other => {
                warn!(method = other, "Unrecognized input method");
                return Err(FigureError::unknown_method(other));
            }
        };

        Ok(Some(method))
    }

    /// Build the source for this method
    ///
    /// `stdin` is the reader bound when the method is [`InputMethod::Stdin`];
    /// `seed` makes the random source reproducible. A file is opened here and
    /// closed when the returned source is dropped.
    pub fn into_source<'a, R>(self, stdin: R, seed: Option<u64>) -> Result<Box<dyn FigureSource + 'a>>
    where
        R: BufRead + 'a,
    {
        let source: Box<dyn FigureSource + 'a> = match self {
            InputMethod::Random => Box::new(match seed {
                Some(seed) => RandomFigureSource::with_seed(seed),
                None => RandomFigureSource::new(),
            }),
            InputMethod::Stdin => Box::new(StreamFigureSource::new(stdin)),
            InputMethod::File(path) => {
                let file = match File::open(&path).and_then(|file| file.metadata().map(|meta| (file, meta))) {
                    Ok((file, meta)) if meta.is_file() => file,
                    Ok(_) => {
                        let e = io::Error::new(io::ErrorKind::InvalidInput, "not a regular file");
                        return Err(FigureError::file_open(path, e));
                    }
                    Err(e) => return Err(FigureError::file_open(path, e)),
                };
                Box::new(StreamFigureSource::new(BufReader::new(file)))
            }
        };

        info!(source = source.name(), "Selected figure source");
        Ok(source)
    }
}

/// Select and build a source in one step
///
/// `Ok(None)` means no input method was given, which callers must handle
/// separately from a failed selection.
pub fn select_source<'a, S, R>(tokens: &[S], stdin: R) -> Result<Option<Box<dyn FigureSource + 'a>>>
where
    S: AsRef<str>,
    R: BufRead + 'a,
{
    InputMethod::from_tokens(tokens)?
        .map(|method| method.into_source(stdin, None))
        .transpose()
}
