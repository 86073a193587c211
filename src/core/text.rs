//! Slicing helpers for the plain text values returned by the exchange service

use crate::core::error::ExchangeError;

/// Returns the part of `s` before the first space.
///
/// A leading space yields an empty slice. Inputs without any space are
/// rejected with [`ExchangeError::MissingSpace`].
pub fn before_space(s: &str) -> Result<&str, ExchangeError> {
    s.find(' ')
        .map(|idx| &s[..idx])
        .ok_or_else(|| ExchangeError::MissingSpace {
            input: s.to_string(),
        })
}

/// Returns the part of `s` after the first space, with surrounding whitespace
/// trimmed.
pub fn after_space(s: &str) -> Result<&str, ExchangeError> {
    s.find(' ')
        .map(|idx| s[idx + 1..].trim())
        .ok_or_else(|| ExchangeError::MissingSpace {
            input: s.to_string(),
        })
}

/// Returns the text between the first two double quotes of `s`.
///
/// Escaped quotes are not recognized.
pub fn first_inside_quotes(s: &str) -> Result<&str, ExchangeError> {
    let missing = || ExchangeError::MissingQuotes {
        input: s.to_string(),
    };

    let open = s.find('"').ok_or_else(missing)?;
    let rest = &s[open + 1..];
    let close = rest.find('"').ok_or_else(missing)?;
    Ok(&rest[..close])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_space() {
        assert_eq!(before_space("2.34 USD").unwrap(), "2.34");
        assert_eq!(before_space("2.34  usd").unwrap(), "2.34");
        assert_eq!(before_space("4.45 doller ").unwrap(), "4.45");
        assert_eq!(before_space(" 4.45 doller").unwrap(), "");
    }

    #[test]
    fn test_before_space_without_space() {
        let result = before_space("64.375");
        assert!(matches!(
            result,
            Err(ExchangeError::MissingSpace { ref input }) if input == "64.375"
        ));
        assert!(before_space("").is_err());
    }

    #[test]
    fn test_after_space() {
        assert_eq!(after_space("4 doller").unwrap(), "doller");
        assert_eq!(after_space("4 doller ").unwrap(), "doller");
        assert_eq!(after_space("4   doller").unwrap(), "doller");
        assert_eq!(after_space(" 4 doller").unwrap(), "4 doller");
        assert_eq!(
            after_space("64.375 Cuban Pesos").unwrap(),
            "Cuban Pesos"
        );
    }

    #[test]
    fn test_after_space_without_space() {
        let err = after_space("doller").unwrap_err();
        assert_eq!(err.to_string(), "No space found in 'doller'");
    }

    #[test]
    fn test_first_inside_quotes() {
        assert_eq!(first_inside_quotes(r#"A "B C" D"#).unwrap(), "B C");
        assert_eq!(first_inside_quotes(r#"A "B C" D "E F" G"#).unwrap(), "B C");
        assert_eq!(first_inside_quotes(r#"hello " brother" "#).unwrap(), " brother");
        assert_eq!(first_inside_quotes(r#""hii" brother"#).unwrap(), "hii");
        assert_eq!(first_inside_quotes(r#"empty "" pair"#).unwrap(), "");
    }

    #[test]
    fn test_first_inside_quotes_needs_two_quotes() {
        assert!(matches!(
            first_inside_quotes("no quotes here"),
            Err(ExchangeError::MissingQuotes { .. })
        ));
        assert!(matches!(
            first_inside_quotes(r#"only "one quote"#),
            Err(ExchangeError::MissingQuotes { .. })
        ));
    }
}
