use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading the input or writing the PDF failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid render options: {0}")]
    InvalidOptions(String),

    /// An internal invariant of the PDF writer did not hold.
    #[error("PDF render error: {0}")]
    Render(String),
}
