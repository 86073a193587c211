//! Exchange service response model
//!
//! The service answers every query with a single line shaped like
//! `{ "lhs" : "2.5 United States Dollars", "rhs" : "64.375 Cuban Pesos", "err" : "" }`.
//! On failure `lhs` and `rhs` are empty and `err` carries the reason.

use crate::core::error::ExchangeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExchangeResponse {
    #[serde(default)]
    pub lhs: String,
    #[serde(default)]
    pub rhs: String,
    #[serde(default)]
    pub err: String,
}

/// A response classified as either a conversion or a refusal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Converted { lhs: String, rhs: String },
    Rejected { message: String },
}

impl ExchangeResponse {
    pub fn parse(json: &str) -> Result<Self, ExchangeError> {
        Ok(serde_json::from_str(json.trim())?)
    }

    /// An empty `lhs` marks the query as failed, whatever `err` says.
    pub fn is_error(&self) -> bool {
        self.lhs.is_empty()
    }

    pub fn into_outcome(self) -> QueryOutcome {
        if self.is_error() {
            let message = if self.err.is_empty() {
                "Unknown error".to_string()
            } else {
                self.err
            };
            QueryOutcome::Rejected { message }
        } else {
            QueryOutcome::Converted {
                lhs: self.lhs,
                rhs: self.rhs,
            }
        }
    }
}

impl QueryOutcome {
    pub fn from_json(json: &str) -> Result<Self, ExchangeError> {
        Ok(ExchangeResponse::parse(json)?.into_outcome())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryOutcome::Rejected { .. })
    }
}

/// Returns the `lhs` value of a response; empty when the query failed.
pub fn get_lhs(json: &str) -> Result<String, ExchangeError> {
    Ok(ExchangeResponse::parse(json)?.lhs)
}

/// Returns the `rhs` value of a response; empty when the query failed.
pub fn get_rhs(json: &str) -> Result<String, ExchangeError> {
    Ok(ExchangeResponse::parse(json)?.rhs)
}

pub fn has_error(json: &str) -> Result<bool, ExchangeError> {
    Ok(ExchangeResponse::parse(json)?.is_error())
}
