//! Error types for quadrature rule selection.
//!
//! Rule lookup has a single core failure mode: the requested order code is not
//! part of the catalog. The remaining variants cover name parsing and loading
//! a rule selection from a JSON configuration file.

use thiserror::Error;

/// Errors that can occur while selecting a triangle quadrature rule.
#[derive(Debug, Error)]
pub enum QuadratureError {
    /// The order code is not part of the rule catalog.
    #[error("unsupported quadrature order {order} (available orders: {supported:?})")]
    UnsupportedQuadratureOrder {
        /// The rejected order code
        order: i64,
        /// Every order code of the catalog, in catalog order
        supported: Vec<i64>,
    },

    /// The rule name does not match any catalog entry.
    #[error("unknown quadrature rule '{name}' (available rules: {available:?})")]
    UnknownRuleName {
        /// The rejected name
        name: String,
        /// Every rule name of the catalog, in catalog order
        available: Vec<&'static str>,
    },

    /// Reading a configuration file failed.
    #[error("failed to read quadrature configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document is not valid JSON or has the wrong shape.
    #[error("invalid quadrature configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for quadrature operations.
pub type Result<T> = std::result::Result<T, QuadratureError>;

impl QuadratureError {
    /// Returns `true` if an order code was rejected.
    pub fn is_order_error(&self) -> bool {
        matches!(self, QuadratureError::UnsupportedQuadratureOrder { .. })
    }

    /// Returns `true` if a rule name was rejected.
    pub fn is_name_error(&self) -> bool {
        matches!(self, QuadratureError::UnknownRuleName { .. })
    }

    /// Returns `true` if the error comes from loading a configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, QuadratureError::Io(_) | QuadratureError::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_display() {
        let err = QuadratureError::UnsupportedQuadratureOrder {
            order: 2,
            supported: vec![1, 3, 7],
        };
        assert_eq!(
            err.to_string(),
            "unsupported quadrature order 2 (available orders: [1, 3, 7])"
        );
    }

    #[test]
    fn test_name_error_display() {
        let err = QuadratureError::UnknownRuleName {
            name: "Gauss4".to_string(),
            available: vec!["BaryCenter", "Gauss3"],
        };
        let msg = err.to_string();
        assert!(msg.contains("Gauss4"));
        assert!(msg.contains("BaryCenter"));
    }

    #[test]
    fn test_error_categories() {
        let order_err = QuadratureError::UnsupportedQuadratureOrder {
            order: -1,
            supported: vec![],
        };
        let name_err = QuadratureError::UnknownRuleName {
            name: String::new(),
            available: vec![],
        };
        let json_err: QuadratureError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();

        assert!(order_err.is_order_error());
        assert!(!order_err.is_name_error());
        assert!(name_err.is_name_error());
        assert!(!name_err.is_config_error());
        assert!(json_err.is_config_error());
        assert!(!json_err.is_order_error());
    }
}
