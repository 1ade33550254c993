use std::{
    io,
    fmt::Write,
};
use colored::Colorize;

/// General enum, representing possible errors.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// Error, produced by an argument parser.
    Lexopt(lexopt::Error),
    /// Degenerate run configuration or parameters.
    InvalidInput(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<lexopt::Error> for Error {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}

impl Error {
    /// Format error message.
    pub fn display(&self) -> String {
        let mut s = String::new();
        match self {
            Self::Io(e) => {
                write!(s, "{}: {}", "Input/Output error".red(), e.kind()).unwrap();
                if let Some(e2) = e.get_ref() {
                    write!(s, ", {}", e2).unwrap();
                }
            }
            Self::Lexopt(e) => write!(s, "{} to parse command-line arguments: {}", "Failed".red(), e).unwrap(),
            Self::InvalidInput(e) => write!(s, "{}: {}", "Invalid input".red(), e).unwrap(),
        };
        s
    }
}

macro_rules! validate_param {
    ($cond:expr, $($arg:expr),+) => {{
        if !($cond) {
            (
                Err($crate::Error::InvalidInput(format!($($arg),+)))
            ?)
        }
    }};
}
pub(crate) use validate_param;

/// Wrapper around the standard result.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(n: u32) -> Result<u32> {
        validate_param!(n > 0, "Value must be positive (got {})", n);
        Ok(n)
    }

    #[test]
    fn validate_param_rejects() {
        assert_eq!(positive(3).unwrap(), 3);
        match positive(0) {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("got 0")),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn display_mentions_message() {
        colored::control::set_override(false);
        let e = Error::InvalidInput("Sequence count is zero".to_string());
        assert_eq!(e.display(), "Invalid input: Sequence count is zero");
    }
}
