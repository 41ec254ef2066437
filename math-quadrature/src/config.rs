//! JSON configuration for quadrature rule selection
//!
//! A rule is selected either by name or by historical order code:
//!
//! ```json
//! { "rule": "Gauss3" }
//! { "rule": 7 }
//! ```

use crate::catalog;
use crate::error::Result;
use crate::name::RuleName;
use crate::rule::QuadratureRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How a rule is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSelection {
    /// Select by rule name
    Name(RuleName),
    /// Select by order code (first catalog match wins)
    Order(i64),
}

impl RuleSelection {
    /// Resolve the selection to a rule name
    pub fn resolve(&self) -> Result<RuleName> {
        match *self {
            RuleSelection::Name(name) => Ok(name),
            RuleSelection::Order(order) => catalog::resolve_order(order),
        }
    }
}

impl From<RuleName> for RuleSelection {
    fn from(name: RuleName) -> Self {
        RuleSelection::Name(name)
    }
}

/// Quadrature configuration loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadratureConfig {
    /// Selected rule
    pub rule: RuleSelection,
}

impl QuadratureConfig {
    /// Configuration for a rule selection
    pub fn new(rule: impl Into<RuleSelection>) -> Self {
        Self { rule: rule.into() }
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Build the selected rule
    pub fn build(&self) -> Result<QuadratureRule> {
        let name = self.rule.resolve()?;
        log::debug!("Quadrature config {:?} resolved to {}", self.rule, name);
        Ok(QuadratureRule::from_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_by_name() {
        let config = QuadratureConfig::from_json(r#"{ "rule": "Gauss_Degree8" }"#).unwrap();
        assert_eq!(config.rule, RuleSelection::Name(RuleName::GaussDegree8));
        assert_eq!(config.build().unwrap().num_points(), 16);
    }

    #[test]
    fn test_select_by_order() {
        let config = QuadratureConfig::from_json(r#"{ "rule": 3 }"#).unwrap();
        assert_eq!(config.rule, RuleSelection::Order(3));
        assert_eq!(config.build().unwrap().name(), RuleName::MidPoint);
    }

    #[test]
    fn test_vertex_by_name_in_config() {
        let config = QuadratureConfig::from_json(r#"{ "rule": "Vertex" }"#).unwrap();
        assert_eq!(config.build().unwrap().name(), RuleName::Vertex);
    }

    #[test]
    fn test_unsupported_order_in_config() {
        let config = QuadratureConfig::from_json(r#"{ "rule": 2 }"#).unwrap();
        assert!(config.build().unwrap_err().is_order_error());
    }

    #[test]
    fn test_invalid_documents() {
        assert!(
            QuadratureConfig::from_json(r#"{ "rule": "Gauss4" }"#)
                .unwrap_err()
                .is_config_error()
        );
        assert!(QuadratureConfig::from_json("{}").unwrap_err().is_config_error());
        assert!(
            QuadratureConfig::from_file("/nonexistent/quadrature.json")
                .unwrap_err()
                .is_config_error()
        );
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join("math_audio_quadrature_config_test.json");
        let config = QuadratureConfig::new(RuleName::Degree19);
        config.to_file(&path).unwrap();

        let loaded = QuadratureConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_file(&path);
    }
}
