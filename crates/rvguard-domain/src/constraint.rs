//! `required_version` constraint expressions: comma-separated, implicitly
//! conjoined comparison clauses such as `>= 1.3, < 2.0`.

use crate::error::ParseError;
use crate::version::SemanticVersion;
use std::fmt;
use std::str::FromStr;

/// Comparison operators understood in a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=` (also the meaning of a bare version)
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `~>`: only the rightmost written component may increase.
    Pessimistic,
}

/// Operator tokens, longest first so `>=` never tokenizes as `>`.
const OPERATOR_TOKENS: &[(&str, Operator)] = &[
    ("~>", Operator::Pessimistic),
    (">=", Operator::GreaterThanOrEqual),
    ("<=", Operator::LessThanOrEqual),
    ("!=", Operator::NotEqual),
    (">", Operator::GreaterThan),
    ("<", Operator::LessThan),
    ("=", Operator::Equal),
];

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Pessimistic => "~>",
        }
    }

    /// Split a leading operator token off `s`. No token means `=`.
    fn split_prefix(s: &str) -> (Operator, &str) {
        for (token, op) in OPERATOR_TOKENS {
            if let Some(rest) = s.strip_prefix(token) {
                return (*op, rest);
            }
        }
        (Operator::Equal, s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(operator, operand)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    pub operator: Operator,
    pub operand: SemanticVersion,
}

impl Clause {
    pub fn new(operator: Operator, operand: SemanticVersion) -> Self {
        Self { operator, operand }
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        let clause = raw.trim();
        let (operator, rest) = Operator::split_prefix(clause);
        let version = rest.trim();

        let operand =
            SemanticVersion::parse(version).map_err(|_| ParseError::InvalidClause {
                clause: clause.to_string(),
                version: version.to_string(),
            })?;

        Ok(Self { operator, operand })
    }

    pub fn admits(&self, v: &SemanticVersion) -> bool {
        let operand = &self.operand;
        match self.operator {
            Operator::Equal => v == operand,
            Operator::NotEqual => v != operand,
            Operator::GreaterThan => v > operand,
            Operator::GreaterThanOrEqual => v >= operand,
            Operator::LessThan => v < operand,
            Operator::LessThanOrEqual => v <= operand,
            Operator::Pessimistic => {
                v >= operand
                    && v.major() == operand.major()
                    && (operand.components() < 3 || v.minor() == operand.minor())
            }
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.operand)
    }
}

/// A conjunction of clauses. With no clauses it admits nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintExpression {
    clauses: Vec<Clause>,
}

impl ConstraintExpression {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// Parse a raw constraint string. Any bad clause fails the whole parse.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.trim().is_empty() {
            return Err(ParseError::EmptyConstraint);
        }

        let mut clauses = Vec::new();
        for piece in raw.split(',') {
            if piece.trim().is_empty() {
                return Err(ParseError::EmptyClause {
                    expression: raw.to_string(),
                });
            }
            clauses.push(Clause::parse(piece)?);
        }

        Ok(Self { clauses })
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// True iff every clause holds for `v`; an empty expression fails closed.
    pub fn admits(&self, v: &SemanticVersion) -> bool {
        if self.clauses.is_empty() {
            return false;
        }
        self.clauses.iter().all(|c| c.admits(v))
    }
}

impl FromStr for ConstraintExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ConstraintExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::parse(s).expect("valid version")
    }

    fn expr(s: &str) -> ConstraintExpression {
        ConstraintExpression::parse(s).expect("valid constraint")
    }

    #[test]
    fn tokenizes_longest_operator_first() {
        let e = expr(">=1.3,<=1.5, !=1.4.1, ~>1.4, >1.0, <2.0, =1.4.2, 1.4.3");
        let ops: Vec<Operator> = e.clauses().iter().map(|c| c.operator).collect();
        assert_eq!(
            ops,
            vec![
                Operator::GreaterThanOrEqual,
                Operator::LessThanOrEqual,
                Operator::NotEqual,
                Operator::Pessimistic,
                Operator::GreaterThan,
                Operator::LessThan,
                Operator::Equal,
                Operator::Equal,
            ]
        );
        assert_eq!(e.clauses()[0].operand, v("1.3"));
    }

    #[test]
    fn clauses_are_conjoined() {
        let e = expr(">= 1.3, < 2.0");
        assert!(e.admits(&v("1.3")));
        assert!(e.admits(&v("1.99.5")));
        assert!(!e.admits(&v("2.0")));
        assert!(!e.admits(&v("1.2.999")));
    }

    #[test]
    fn comparison_operators() {
        assert!(expr("= 1.4").admits(&v("1.4.0")));
        assert!(!expr("= 1.4").admits(&v("1.4.1")));
        assert!(expr("!= 1.4").admits(&v("1.4.1")));
        assert!(!expr("> 1.4").admits(&v("1.4")));
        assert!(expr("<= 1.4").admits(&v("1.4")));
        assert!(!expr("< 1.4").admits(&v("1.4")));
    }

    #[test]
    fn pessimistic_with_two_components_pins_major() {
        let e = expr("~> 1.4");
        assert!(e.admits(&v("1.4")));
        assert!(e.admits(&v("1.5")));
        assert!(e.admits(&v("1.99.3")));
        assert!(!e.admits(&v("1.3")));
        assert!(!e.admits(&v("2.0")));
    }

    #[test]
    fn pessimistic_with_three_components_pins_minor() {
        let e = expr("~> 1.4.2");
        assert!(e.admits(&v("1.4.2")));
        assert!(e.admits(&v("1.4.9")));
        assert!(!e.admits(&v("1.4.1")));
        assert!(!e.admits(&v("1.5.0")));
    }

    #[test]
    fn empty_expression_fails_closed() {
        let e = ConstraintExpression::new(Vec::new());
        assert!(!e.admits(&v("1.3")));
        assert!(!e.admits(&v("0.0")));
    }

    #[test]
    fn blank_input_and_blank_clauses_are_rejected() {
        assert_eq!(
            ConstraintExpression::parse("  ").unwrap_err(),
            ParseError::EmptyConstraint
        );
        assert!(matches!(
            ConstraintExpression::parse(">= 1.3,").unwrap_err(),
            ParseError::EmptyClause { .. }
        ));
    }

    #[test]
    fn malformed_clause_names_the_operand() {
        let err = ConstraintExpression::parse(">= 1.3, >= abc").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidClause {
                clause: ">= abc".to_string(),
                version: "abc".to_string(),
            }
        );
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn operator_without_operand_is_rejected() {
        let err = ConstraintExpression::parse(">=").unwrap_err();
        assert!(matches!(err, ParseError::InvalidClause { ref version, .. } if version.is_empty()));
    }

    #[test]
    fn display_normalizes_spacing() {
        assert_eq!(expr(">=1.3,<2.0").to_string(), ">= 1.3, < 2.0");
        assert_eq!(expr("1.4").to_string(), "= 1.4");
    }
}
