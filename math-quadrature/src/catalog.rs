//! Order code catalog
//!
//! Order codes are historical labels, not polynomial degrees. The catalog is an
//! ordered list of `(code, rule)` pairs and code lookup returns the first pair
//! whose code matches. Code `3` appears twice: it resolves to
//! [`RuleName::MidPoint`], which leaves [`RuleName::Vertex`] reachable only by
//! name.

use crate::error::{QuadratureError, Result};
use crate::name::RuleName;

/// Catalog of supported order codes, in lookup order
pub const CATALOG: [(i64, RuleName); 11] = [
    (1, RuleName::BaryCenter),
    (3, RuleName::MidPoint),
    (107, RuleName::SevenPoint),
    (3, RuleName::Vertex),
    (7, RuleName::Gauss3),
    (15, RuleName::Degree8),
    (19, RuleName::Degree9),
    (27, RuleName::Degree11),
    (73, RuleName::Degree19),
    (21, RuleName::CompGauss3),
    (16, RuleName::GaussDegree8),
];

/// All catalog order codes in catalog order, duplicates included
pub fn supported_orders() -> Vec<i64> {
    CATALOG.iter().map(|&(code, _)| code).collect()
}

/// Resolve an order code to a rule name (first match wins)
pub fn resolve_order(order: i64) -> Result<RuleName> {
    CATALOG
        .iter()
        .find(|&&(code, _)| code == order)
        .map(|&(_, name)| name)
        .ok_or_else(|| QuadratureError::UnsupportedQuadratureOrder {
            order,
            supported: supported_orders(),
        })
}

/// Order code paired with a rule name in the catalog
pub fn order_code_of(name: RuleName) -> i64 {
    match name {
        RuleName::BaryCenter => 1,
        RuleName::MidPoint | RuleName::Vertex => 3,
        RuleName::SevenPoint => 107,
        RuleName::Gauss3 => 7,
        RuleName::Degree8 => 15,
        RuleName::Degree9 => 19,
        RuleName::Degree11 => 27,
        RuleName::Degree19 => 73,
        RuleName::CompGauss3 => 21,
        RuleName::GaussDegree8 => 16,
    }
}

/// Whether [`resolve_order`] can ever return this rule
pub fn is_reachable_by_order(name: RuleName) -> bool {
    matches!(resolve_order(order_code_of(name)), Ok(resolved) if resolved == name)
}

/// Rules hidden behind an earlier catalog entry with the same code
pub fn shadowed_rules() -> Vec<RuleName> {
    RuleName::ALL
        .into_iter()
        .filter(|&name| !is_reachable_by_order(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_pairs_every_name_once() {
        for name in RuleName::ALL {
            let count = CATALOG.iter().filter(|&&(_, n)| n == name).count();
            assert_eq!(count, 1, "{name} appears {count} times");
        }
    }

    #[test]
    fn test_order_code_of_matches_catalog() {
        for (code, name) in CATALOG {
            assert_eq!(order_code_of(name), code);
        }
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(resolve_order(3).unwrap(), RuleName::MidPoint);
        assert_eq!(resolve_order(107).unwrap(), RuleName::SevenPoint);
        assert_eq!(resolve_order(16).unwrap(), RuleName::GaussDegree8);
    }

    #[test]
    fn test_vertex_is_shadowed() {
        assert!(!is_reachable_by_order(RuleName::Vertex));
        assert!(is_reachable_by_order(RuleName::MidPoint));
        assert_eq!(shadowed_rules(), vec![RuleName::Vertex]);
    }

    #[test]
    fn test_unsupported_order() {
        for order in [0, 2, 99, -1, 999] {
            match resolve_order(order) {
                Err(QuadratureError::UnsupportedQuadratureOrder { order: o, supported }) => {
                    assert_eq!(o, order);
                    assert_eq!(supported, vec![1, 3, 107, 3, 7, 15, 19, 27, 73, 21, 16]);
                }
                other => panic!("order {order}: expected rejection, got {other:?}"),
            }
        }
    }
}
