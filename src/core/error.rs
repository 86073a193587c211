//! Errors raised while interpreting exchange service responses

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The input was expected to contain at least one space.
    #[error("No space found in '{input}'")]
    MissingSpace { input: String },

    /// The input was expected to contain at least two double quotes.
    #[error("No quoted segment found in '{input}'")]
    MissingQuotes { input: String },

    /// The service returned a body that does not match `{lhs, rhs, err}`.
    #[error("Malformed exchange response: {source}")]
    MalformedResponse {
        #[from]
        source: serde_json::Error,
    },

    /// The service understood the query but refused it.
    #[error("Exchange rejected: {message}")]
    Rejected { message: String },
}
