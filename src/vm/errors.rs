//! Error types for calculator operations
//!
//! This module defines every failure that evaluating an RPN line can produce.
//! None of them is fatal: the host prints the message and keeps the session alive.

use thiserror::Error;

/// Error variants that can occur while evaluating a line
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// The line failed lexical validation; nothing was executed
    #[error("Illegal input format, please enter again.")]
    IllegalFormat,

    /// An operator found fewer operands on the stack than its arity
    ///
    /// `position` is 1-based, counted in tokens from the start of the line.
    #[error("operator {operator} (position: {position}): insufficient parameters")]
    InsufficientOperands { operator: String, position: usize },

    /// Division with an exact zero divisor
    #[error("Divide by 0 is forbidden")]
    DivideByZero,

    /// A token resolved to no known instruction
    #[error("undefined argument")]
    UndefinedInstruction,

    /// Raw pop on an empty stack
    #[error("Stack underflow during {op_name}")]
    StackUnderflow { op_name: String },
}

/// Result alias used throughout the engine
pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    /// Build an `InsufficientOperands` error from a 0-based token position
    pub fn insufficient(operator: impl ToString, position: usize) -> Self {
        CalcError::InsufficientOperands {
            operator: operator.to_string(),
            position: position + 1,
        }
    }
}
