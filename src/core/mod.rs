//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod response;
pub mod text;

// Re-export main types for cleaner imports
pub use currency::{Conversion, ExchangeQuery, convert, exchange, is_currency};
pub use error::ExchangeError;
pub use response::{ExchangeResponse, QueryOutcome, get_lhs, get_rhs, has_error};
pub use text::{after_space, before_space, first_inside_quotes};
