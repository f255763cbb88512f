//! AST evaluator

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcResult, Operation};

/// Evaluator for parsed expressions
///
/// Stateless: evaluating the same tree twice always gives the same value.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node
    ///
    /// Walks the tree with an explicit stack; a long operator chain is as
    /// deep as it is long.
    #[must_use]
    pub fn evaluate(&self, node: &AstNode) -> f64 {
        enum Step<'a> {
            Visit(&'a AstNode),
            Negate,
            Apply(Operation),
        }

        let mut steps = vec![Step::Visit(node)];
        let mut values: Vec<f64> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(AstNode::Number(n)) => values.push(*n),
                Step::Visit(AstNode::Plus(inner)) => steps.push(Step::Visit(inner)),
                Step::Visit(AstNode::Negate(inner)) => {
                    steps.push(Step::Negate);
                    steps.push(Step::Visit(inner));
                }
                Step::Visit(AstNode::BinaryOp { left, op, right }) => {
                    steps.push(Step::Apply(*op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Negate => {
                    if let Some(value) = values.last_mut() {
                        *value = -*value;
                    }
                }
                Step::Apply(op) => {
                    // operands were pushed left first
                    if let (Some(b), Some(a)) = (values.pop(), values.pop()) {
                        values.push(op.apply(a, b));
                    }
                }
            }
        }
        values.pop().unwrap_or(f64::NAN)
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        Ok(self.evaluate(&ast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    #[test]
    fn test_evaluate_number() {
        assert_eq!(Evaluator::new().evaluate(&AstNode::number(42.0)), 42.0);
    }

    #[test]
    fn test_evaluate_negate_and_plus() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate(&AstNode::negate(AstNode::number(5.0))), -5.0);
        assert_eq!(eval.evaluate(&AstNode::plus(AstNode::number(5.0))), 5.0);
    }

    #[test]
    fn test_evaluate_nested_tree() {
        // (1 + 2) * (3 + 4) = 21
        let ast = AstNode::binary(
            AstNode::binary(AstNode::number(1.0), Operation::Add, AstNode::number(2.0)),
            Operation::Multiply,
            AstNode::binary(AstNode::number(3.0), Operation::Add, AstNode::number(4.0)),
        );
        assert_eq!(Evaluator::new().evaluate(&ast), 21.0);
    }

    #[test]
    fn test_evaluate_str_precedence() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2+3*4"), Ok(14.0));
        assert_eq!(eval.evaluate_str("(2+3)*4"), Ok(20.0));
        assert_eq!(eval.evaluate_str("10-4-3"), Ok(3.0));
        assert_eq!(eval.evaluate_str("100/10/5"), Ok(2.0));
        assert_eq!(eval.evaluate_str("-5+10"), Ok(5.0));
        assert_eq!(eval.evaluate_str("2*-3"), Ok(-6.0));
    }

    #[test]
    fn test_evaluate_str_decimals() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("0.5*4"), Ok(2.0));
        assert_eq!(eval.evaluate_str("0.1+0.2"), Ok(0.1 + 0.2));
    }

    #[test]
    fn test_evaluate_str_division_by_zero() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("1/0"), Ok(f64::INFINITY));
        assert_eq!(eval.evaluate_str("-1/0"), Ok(f64::NEG_INFINITY));
        assert!(eval.evaluate_str("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_evaluate_str_errors() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str(""), Err(CalcError::EmptyExpression));
        assert!(matches!(
            eval.evaluate_str("(2+3"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_evaluate_long_chain() {
        let chain = format!("{}1", "1+".repeat(200_000));
        assert_eq!(Evaluator::new().evaluate_str(&chain), Ok(200_001.0));
    }

    #[test]
    fn test_evaluate_mixed_signs_and_groups() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("-(2+3)*-(1-4)"), Ok(-15.0));
        assert_eq!(eval.evaluate_str("+-+2"), Ok(-2.0));
        assert_eq!(eval.evaluate_str("8-(3-(2-1))"), Ok(6.0));
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let eval = Evaluator::new();
        let ast = Parser::parse_str("7/3").unwrap();
        assert_eq!(eval.evaluate(&ast), eval.evaluate(&ast));
    }
}
