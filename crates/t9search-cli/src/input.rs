use std::io::{self, BufRead, Lines};

use t9search_core::{Contact, CoreError, MAX_FIELD_LEN};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read contacts: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: CoreError,
    },
}

/// Pulls `Contact` records out of alternating name and number lines.
///
/// A name with no number line after it ends the stream without an error.
pub struct ContactReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> ContactReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Option<Result<String, InputError>> {
        let next = self.lines.next()?;
        self.line += 1;
        Some(next.map_err(InputError::from))
    }
}

impl<R: BufRead> Iterator for ContactReader<R> {
    type Item = Result<Contact, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = match self.next_line()? {
            Ok(name) => name,
            Err(err) => return Some(Err(err)),
        };
        if name.len() > MAX_FIELD_LEN {
            return Some(Err(InputError::Invalid {
                line: self.line,
                source: CoreError::NameTooLong(MAX_FIELD_LEN),
            }));
        }

        let number = match self.next_line() {
            Some(Ok(number)) => number,
            Some(Err(err)) => return Some(Err(err)),
            None => {
                debug!(line = self.line, "contact name without number at end of input");
                return None;
            }
        };

        Some(
            Contact::new(&name, &number).map_err(|source| InputError::Invalid {
                line: self.line,
                source,
            }),
        )
    }
}
