//! Fixed quadrature rules for triangular finite elements
//!
//! This crate provides a catalog of precomputed quadrature rules on the
//! reference triangle (0,0), (1,0), (0,1). Rules are selected by name or by
//! their historical order code, and expose weights together with the
//! reference coordinates (xi, eta) of their points.
//!
//! # Features
//!
//! - **11 rules**: from the 1-point centroid rule up to a 73-point rule
//! - **Static tables**: literal data, never computed or mutated at runtime
//! - **Order codes**: first-match lookup compatible with existing inputs
//! - **JSON config**: select a rule from a configuration file
//!
//! # Example
//!
//! ```
//! use math_audio_quadrature::{QuadratureRule, RuleName};
//!
//! let rule = QuadratureRule::from_name(RuleName::Gauss3);
//! let (weights, xi, eta) = rule.quad_values();
//! assert_eq!(weights.len(), 7);
//! assert_eq!(xi.len(), eta.len());
//!
//! // Integral of xi * eta over the reference triangle
//! let integral = rule.integrate(|x, y| x * y);
//! assert!((integral - 1.0 / 24.0).abs() < 1e-14);
//! ```

pub mod catalog;
mod config;
mod error;
mod name;
mod rule;
mod tables;

pub use catalog::{CATALOG, resolve_order, supported_orders};
pub use config::*;
pub use error::*;
pub use name::*;
pub use rule::*;

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
