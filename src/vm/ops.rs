//! Operation registry
//!
//! Maps operator symbols to the numeric transforms they perform. Operations are
//! stateless, so the registry is nothing more than two closed enums and a
//! lookup per arity:
//! - `UnaryOperation`: consumes one operand (`sqrt`)
//! - `BinaryOperation`: consumes two operands (`+ - * /`)
//!
//! Every transform returns a `Vec<f64>` of exactly `result_count()` values so
//! that undo knows how many results to discard.

use crate::vm::errors::{CalcError, CalcResult};
use std::fmt;

/// Metadata shared by every registered operation
pub trait Operation: fmt::Display {
    /// Symbol the operation is invoked with
    fn symbol(&self) -> &'static str;

    /// Number of operands consumed from the stack
    fn arity(&self) -> usize;

    /// Number of values the transform pushes back
    fn result_count(&self) -> usize;
}

/// Operations consuming a single operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperation {
    /// Square root. Negative input yields NaN, as `f64::sqrt` does.
    Sqrt,
}

impl UnaryOperation {
    /// Every registered unary operation
    pub const ALL: [UnaryOperation; 1] = [UnaryOperation::Sqrt];

    /// Look up a unary operation by symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the transform to `x`
    pub fn apply(&self, x: f64) -> Vec<f64> {
        match self {
            UnaryOperation::Sqrt => vec![x.sqrt()],
        }
    }
}

impl Operation for UnaryOperation {
    fn symbol(&self) -> &'static str {
        match self {
            UnaryOperation::Sqrt => "sqrt",
        }
    }

    fn arity(&self) -> usize {
        1
    }

    fn result_count(&self) -> usize {
        match self {
            UnaryOperation::Sqrt => 1,
        }
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Operations consuming two operands
///
/// Operands are passed in push order: `a` was pushed first, `b` was the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
    Addition,
    Subtraction,
    Multiplication,
    /// Fails with `DivideByZero` when `b` is exactly zero
    Division,
}

impl BinaryOperation {
    /// Every registered binary operation
    pub const ALL: [BinaryOperation; 4] = [
        BinaryOperation::Addition,
        BinaryOperation::Subtraction,
        BinaryOperation::Multiplication,
        BinaryOperation::Division,
    ];

    /// Look up a binary operation by symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the transform to `(a, b)`
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<Vec<f64>> {
        match self {
            BinaryOperation::Addition => Ok(vec![a + b]),
            BinaryOperation::Subtraction => Ok(vec![a - b]),
            BinaryOperation::Multiplication => Ok(vec![a * b]),
            BinaryOperation::Division => {
                if b == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                Ok(vec![a / b])
            }
        }
    }
}

impl Operation for BinaryOperation {
    fn symbol(&self) -> &'static str {
        match self {
            BinaryOperation::Addition => "+",
            BinaryOperation::Subtraction => "-",
            BinaryOperation::Multiplication => "*",
            BinaryOperation::Division => "/",
        }
    }

    fn arity(&self) -> usize {
        2
    }

    fn result_count(&self) -> usize {
        1
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Resolve a unary operation symbol
pub fn resolve_unary(symbol: &str) -> Option<UnaryOperation> {
    UnaryOperation::from_symbol(symbol)
}

/// Resolve a binary operation symbol
pub fn resolve_binary(symbol: &str) -> Option<BinaryOperation> {
    BinaryOperation::from_symbol(symbol)
}
