//! Names of the available triangle quadrature rules

use crate::error::{QuadratureError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Triangle quadrature rule name
///
/// The serialized form is the historical rule label, e.g. `"Gauss_Degree8"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleName {
    /// 1-point centroid rule
    BaryCenter,
    /// 3-point edge-midpoint rule
    MidPoint,
    /// 7-point rule on centroid, edge midpoints and vertices
    SevenPoint,
    /// 3-point vertex rule
    Vertex,
    /// 7-point symmetric rule (degree 5)
    Gauss3,
    /// 15-point rule with domain-extended points
    Degree8,
    /// 19-point symmetric rule
    Degree9,
    /// 27-point rule with domain-extended points
    Degree11,
    /// 73-point symmetric rule
    Degree19,
    /// 21-point composite rule built from three Gauss3 blocks
    CompGauss3,
    /// 16-point symmetric rule (degree 8)
    #[serde(rename = "Gauss_Degree8")]
    GaussDegree8,
}

impl RuleName {
    /// Every rule name, in catalog order
    pub const ALL: [RuleName; 11] = [
        RuleName::BaryCenter,
        RuleName::MidPoint,
        RuleName::SevenPoint,
        RuleName::Vertex,
        RuleName::Gauss3,
        RuleName::Degree8,
        RuleName::Degree9,
        RuleName::Degree11,
        RuleName::Degree19,
        RuleName::CompGauss3,
        RuleName::GaussDegree8,
    ];

    /// Historical label of the rule
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::BaryCenter => "BaryCenter",
            RuleName::MidPoint => "MidPoint",
            RuleName::SevenPoint => "SevenPoint",
            RuleName::Vertex => "Vertex",
            RuleName::Gauss3 => "Gauss3",
            RuleName::Degree8 => "Degree8",
            RuleName::Degree9 => "Degree9",
            RuleName::Degree11 => "Degree11",
            RuleName::Degree19 => "Degree19",
            RuleName::CompGauss3 => "CompGauss3",
            RuleName::GaussDegree8 => "Gauss_Degree8",
        }
    }

    /// Number of quadrature points of the rule
    pub fn num_points(&self) -> usize {
        match self {
            RuleName::BaryCenter => 1,
            RuleName::MidPoint | RuleName::Vertex => 3,
            RuleName::SevenPoint | RuleName::Gauss3 => 7,
            RuleName::Degree8 => 15,
            RuleName::GaussDegree8 => 16,
            RuleName::Degree9 => 19,
            RuleName::CompGauss3 => 21,
            RuleName::Degree11 => 27,
            RuleName::Degree19 => 73,
        }
    }

    /// Whether some points of the rule lie outside the reference triangle
    pub fn has_domain_extended_points(&self) -> bool {
        matches!(self, RuleName::Degree8 | RuleName::Degree11)
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<Self> {
        RuleName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| QuadratureError::UnknownRuleName {
                name: s.to_string(),
                available: RuleName::ALL.iter().map(RuleName::as_str).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_labels() {
        for name in RuleName::ALL {
            assert_eq!(name.as_str().parse::<RuleName>().unwrap(), name);
        }
        assert_eq!(
            "Gauss_Degree8".parse::<RuleName>().unwrap(),
            RuleName::GaussDegree8
        );
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "GaussDegree8".parse::<RuleName>().unwrap_err();
        assert!(err.is_name_error());

        // Labels are case sensitive
        assert!("gauss3".parse::<RuleName>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&RuleName::GaussDegree8).unwrap();
        assert_eq!(json, "\"Gauss_Degree8\"");

        let name: RuleName = serde_json::from_str("\"CompGauss3\"").unwrap();
        assert_eq!(name, RuleName::CompGauss3);
    }

    #[test]
    fn test_domain_extended_rules() {
        let extended: Vec<_> = RuleName::ALL
            .iter()
            .filter(|n| n.has_domain_extended_points())
            .collect();
        assert_eq!(extended, vec![&RuleName::Degree8, &RuleName::Degree11]);
    }
}
