//! Currency conversion abstractions

use crate::core::config::ProbeConfig;
use crate::core::error::ExchangeError;
use crate::core::response::QueryOutcome;
use crate::core::text::before_space;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait ExchangeQuery: Send + Sync {
    /// Asks the service to convert `amt` units of `old` into `new` and
    /// returns the raw response body.
    async fn query_website(&self, old: &str, new: &str, amt: f64) -> Result<String>;
}

/// A successful conversion as reported by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Amount and name of the source currency, e.g. "2.5 United States Dollars".
    pub source: String,
    /// Amount and name of the target currency, e.g. "64.375 Cuban Pesos".
    pub target: String,
    /// Numeric part of `target`.
    pub amount: String,
}

impl Conversion {
    pub fn amount_value(&self) -> Result<f64> {
        self.amount
            .parse::<f64>()
            .map_err(|e| anyhow::anyhow!("Invalid converted amount '{}': {}", self.amount, e))
    }
}

/// Returns true when the service recognizes `code`.
///
/// Runs a probe conversion from `code` into the configured reference
/// currency. Transport failures are errors, not `false`.
pub async fn is_currency(
    service: &dyn ExchangeQuery,
    code: &str,
    probe: &ProbeConfig,
) -> Result<bool> {
    let json = service
        .query_website(code, &probe.reference_currency, probe.amount)
        .await?;
    let outcome = QueryOutcome::from_json(&json)?;
    debug!(code, ?outcome, "Probe query finished");
    Ok(!outcome.is_error())
}

pub async fn convert(
    service: &dyn ExchangeQuery,
    old: &str,
    new: &str,
    amt: f64,
) -> Result<Conversion> {
    let json = service.query_website(old, new, amt).await?;
    match QueryOutcome::from_json(&json)? {
        QueryOutcome::Converted { lhs, rhs } => {
            let amount = before_space(&rhs)?.to_string();
            Ok(Conversion {
                source: lhs,
                target: rhs,
                amount,
            })
        }
        QueryOutcome::Rejected { message } => Err(ExchangeError::Rejected { message }.into()),
    }
}

/// Returns the amount of `new` received for `amt` units of `old`, as the
/// numeric text reported by the service.
pub async fn exchange(
    service: &dyn ExchangeQuery,
    old: &str,
    new: &str,
    amt: f64,
) -> Result<String> {
    Ok(convert(service, old, new, amt).await?.amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockExchange {
        body: String,
        calls: Mutex<Vec<(String, String, f64)>>,
    }

    impl MockExchange {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ExchangeQuery for MockExchange {
        async fn query_website(&self, old: &str, new: &str, amt: f64) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((old.to_string(), new.to_string(), amt));
            Ok(self.body.clone())
        }
    }

    struct FailingExchange;

    #[async_trait]
    impl ExchangeQuery for FailingExchange {
        async fn query_website(&self, _old: &str, _new: &str, _amt: f64) -> Result<String> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    const CUP: &str =
        r#"{ "lhs" : "2.5 United States Dollars", "rhs" : "64.375 Cuban Pesos", "err" : "" }"#;
    const BAD_SOURCE: &str =
        r#"{ "lhs" : "", "rhs" : "", "err" : "Source currency code is invalid." }"#;

    #[tokio::test]
    async fn test_exchange_returns_numeric_prefix() {
        let service = MockExchange::new(CUP);
        let amount = exchange(&service, "USD", "CUP", 2.5).await.unwrap();
        assert_eq!(amount, "64.375");
        assert_eq!(
            *service.calls.lock().unwrap(),
            vec![("USD".to_string(), "CUP".to_string(), 2.5)]
        );
    }

    #[tokio::test]
    async fn test_convert_keeps_both_sides() {
        let service = MockExchange::new(CUP);
        let conversion = convert(&service, "USD", "CUP", 2.5).await.unwrap();
        assert_eq!(conversion.source, "2.5 United States Dollars");
        assert_eq!(conversion.target, "64.375 Cuban Pesos");
        assert_eq!(conversion.amount_value().unwrap(), 64.375);
    }

    #[tokio::test]
    async fn test_exchange_surfaces_rejection() {
        let service = MockExchange::new(BAD_SOURCE);
        let err = exchange(&service, "SSS", "USD", 4.5).await.unwrap_err();
        match err.downcast_ref::<ExchangeError>() {
            Some(ExchangeError::Rejected { message }) => {
                assert_eq!(message, "Source currency code is invalid.")
            }
            other => panic!("Expected a rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_exchange_rhs_without_currency_name() {
        let service = MockExchange::new(r#"{ "lhs" : "1 Bitcoin", "rhs" : "42", "err" : "" }"#);
        let err = exchange(&service, "BTC", "EUR", 1.0).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExchangeError>(),
            Some(ExchangeError::MissingSpace { .. })
        ));
    }

    #[tokio::test]
    async fn test_is_currency_uses_probe() {
        let service = MockExchange::new(CUP);
        let probe = ProbeConfig::default();
        assert!(is_currency(&service, "USD", &probe).await.unwrap());
        assert_eq!(
            *service.calls.lock().unwrap(),
            vec![("USD".to_string(), "INR".to_string(), 2.5)]
        );
    }

    #[tokio::test]
    async fn test_is_currency_false_on_error_response() {
        let service = MockExchange::new(BAD_SOURCE);
        let probe = ProbeConfig::default();
        assert!(!is_currency(&service, "ZEE", &probe).await.unwrap());
        assert!(crate::core::response::has_error(BAD_SOURCE).unwrap());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let probe = ProbeConfig::default();
        let result = is_currency(&FailingExchange, "USD", &probe).await;
        assert_eq!(result.unwrap_err().to_string(), "connection refused");

        let result = exchange(&FailingExchange, "USD", "EUR", 1.0).await;
        assert!(result.is_err());
    }
}
