//! Quadrature rule selection for the reference triangle

use crate::catalog::{self, CATALOG};
use crate::error::Result;
use crate::name::RuleName;
use crate::tables;
use ndarray::Array1;

/// A single quadrature point with weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraturePoint {
    /// Reference coordinates (xi, eta)
    pub coords: [f64; 2],
    /// Integration weight
    pub weight: f64,
}

impl QuadraturePoint {
    pub fn new(xi: f64, eta: f64, weight: f64) -> Self {
        Self {
            coords: [xi, eta],
            weight,
        }
    }

    #[inline]
    pub fn xi(&self) -> f64 {
        self.coords[0]
    }

    #[inline]
    pub fn eta(&self) -> f64 {
        self.coords[1]
    }
}

/// Quadrature rule on the reference triangle (0,0), (1,0), (0,1)
///
/// Weights and coordinates borrow the static rule tables, so a rule is cheap
/// to copy and never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureRule {
    name: RuleName,
    order_code: i64,
    weights: &'static [f64],
    xi: &'static [f64],
    eta: &'static [f64],
}

impl QuadratureRule {
    /// Create the rule with the given name
    pub fn from_name(name: RuleName) -> Self {
        let table = tables::lookup(name);
        log::debug!("Selected {} quadrature ({} points)", name, table.weights.len());

        Self {
            name,
            order_code: catalog::order_code_of(name),
            weights: table.weights,
            xi: table.xi,
            eta: table.eta,
        }
    }

    /// Create the rule registered under an order code
    ///
    /// The first catalog entry with a matching code wins, so order 3 always
    /// selects [`RuleName::MidPoint`] and never [`RuleName::Vertex`].
    ///
    /// # Errors
    ///
    /// [`QuadratureError::UnsupportedQuadratureOrder`](crate::QuadratureError::UnsupportedQuadratureOrder)
    /// if no catalog entry has this code.
    #[deprecated(note = "order codes are ambiguous, use `QuadratureRule::from_name`")]
    pub fn new(order: i64) -> Result<Self> {
        let name = catalog::resolve_order(order)?;

        let hidden: Vec<RuleName> = CATALOG
            .iter()
            .filter(|&&(code, other)| code == order && other != name)
            .map(|&(_, other)| other)
            .collect();
        if !hidden.is_empty() {
            log::warn!(
                "Quadrature order {} resolves to {}, {:?} with the same order is only reachable by name",
                order,
                name,
                hidden
            );
        }

        Ok(Self::from_name(name))
    }

    /// Rule name
    pub fn name(&self) -> RuleName {
        self.name
    }

    /// Catalog order code of the rule
    pub fn order_code(&self) -> i64 {
        self.order_code
    }

    /// Number of quadrature points
    pub fn num_points(&self) -> usize {
        self.weights.len()
    }

    /// Quadrature weights
    pub fn quad_weights(&self) -> &[f64] {
        self.weights
    }

    /// Weights and reference coordinates as `(weights, xi, eta)`
    ///
    /// Index `i` refers to the same point in all three slices.
    pub fn quad_values(&self) -> (&[f64], &[f64], &[f64]) {
        (self.weights, self.xi, self.eta)
    }

    /// Owned copies of `(weights, xi, eta)`
    pub fn to_arrays(&self) -> (Array1<f64>, Array1<f64>, Array1<f64>) {
        (
            Array1::from(self.weights.to_vec()),
            Array1::from(self.xi.to_vec()),
            Array1::from(self.eta.to_vec()),
        )
    }

    /// Iterator over quadrature points
    pub fn points(&self) -> impl Iterator<Item = QuadraturePoint> + use<> {
        let (weights, xi, eta) = (self.weights, self.xi, self.eta);
        (0..weights.len()).map(move |i| QuadraturePoint::new(xi[i], eta[i], weights[i]))
    }

    /// Sum of the weights (0.5 for every catalog rule up to rounding)
    pub fn weight_sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Integrate `f(xi, eta)` over the reference triangle
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        self.points().map(|p| p.weight * f(p.xi(), p.eta())).sum()
    }

    /// Indices of points lying outside the reference triangle by more than `tol`
    pub fn points_outside_reference(&self, tol: f64) -> Vec<usize> {
        self.points()
            .enumerate()
            .filter(|(_, p)| {
                let (xi, eta) = (p.xi(), p.eta());
                xi < -tol || eta < -tol || xi > 1.0 + tol || eta > 1.0 + tol || xi + eta > 1.0 + tol
            })
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::error::QuadratureError;

    #[test]
    fn test_barycenter_rule() {
        let rule = QuadratureRule::new(1).unwrap();
        assert_eq!(rule.name(), RuleName::BaryCenter);

        let (w, xi, eta) = rule.quad_values();
        assert_eq!(w, &[0.5]);
        assert!((xi[0] - 1.0 / 3.0).abs() < 1e-15);
        assert!((eta[0] - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_gauss3_rule() {
        let rule = QuadratureRule::new(7).unwrap();
        assert_eq!(rule.name(), RuleName::Gauss3);
        assert_eq!(rule.num_points(), 7);
        assert_eq!(rule.quad_weights()[0], 0.1125);
    }

    #[test]
    fn test_order_three_is_midpoint() {
        for _ in 0..3 {
            let rule = QuadratureRule::new(3).unwrap();
            assert_eq!(rule.name(), RuleName::MidPoint);
            assert_eq!(rule.quad_values().1, &[0.5, 0.5, 0.0]);
        }
    }

    #[test]
    fn test_vertex_by_name() {
        let rule = QuadratureRule::from_name(RuleName::Vertex);
        assert_eq!(rule.order_code(), 3);

        let (w, xi, eta) = rule.quad_values();
        assert_eq!(w.len(), 3);
        assert_eq!(xi, &[0.0, 1.0, 0.0]);
        assert_eq!(eta, &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unsupported_order_fails() {
        let err = QuadratureRule::new(999).unwrap_err();
        match err {
            QuadratureError::UnsupportedQuadratureOrder { order, supported } => {
                assert_eq!(order, 999);
                assert_eq!(supported.len(), 11);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_points_follow_tables() {
        let rule = QuadratureRule::from_name(RuleName::Degree9);
        let (w, xi, eta) = rule.quad_values();

        for (i, p) in rule.points().enumerate() {
            assert_eq!(p.weight, w[i]);
            assert_eq!(p.xi(), xi[i]);
            assert_eq!(p.eta(), eta[i]);
        }
        assert_eq!(rule.points().count(), 19);
    }

    #[test]
    fn test_to_arrays() {
        let rule = QuadratureRule::from_name(RuleName::CompGauss3);
        let (w, xi, eta) = rule.to_arrays();
        assert_eq!(w.len(), 21);
        assert_eq!(xi.as_slice().unwrap(), rule.quad_values().1);
        assert_eq!(eta.as_slice().unwrap(), rule.quad_values().2);
    }

    #[test]
    fn test_integrate_linear() {
        // Integral of xi over the reference triangle is 1/6
        for name in RuleName::ALL {
            let rule = QuadratureRule::from_name(name);
            let integral = rule.integrate(|xi, _| xi);
            assert!(
                (integral - 1.0 / 6.0).abs() < 1e-14,
                "{} failed: integral = {}",
                name,
                integral
            );
        }
    }

    #[test]
    fn test_points_outside_reference() {
        let tol = 1e-12;
        assert_eq!(
            QuadratureRule::from_name(RuleName::Degree8).points_outside_reference(tol),
            vec![4, 9, 14]
        );
        assert_eq!(
            QuadratureRule::from_name(RuleName::Degree11).points_outside_reference(tol),
            vec![6, 7, 8]
        );
        assert!(
            QuadratureRule::from_name(RuleName::Gauss3)
                .points_outside_reference(tol)
                .is_empty()
        );
    }
}
