//! Numeric stack
//!
//! The operand stack shared by every instruction of a session. The top of the
//! stack is the most recently pushed value.

use crate::format::format_value;
use crate::vm::errors::{CalcError, CalcResult};

/// Operand stack of the calculator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcStack {
    /// The values on the stack, bottom first
    stack: Vec<f64>,
}

impl CalcStack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a value onto the stack
    pub fn push(&mut self, value: f64) {
        self.stack.push(value);
    }

    /// Pop a value from the stack
    pub fn pop(&mut self, op_name: &str) -> CalcResult<f64> {
        self.stack.pop().ok_or_else(|| CalcError::StackUnderflow {
            op_name: op_name.to_string(),
        })
    }

    /// Pop two values, returned in push order `(a, b)` where `b` was the top
    pub fn pop_two(&mut self, op_name: &str) -> CalcResult<(f64, f64)> {
        if self.stack.len() < 2 {
            return Err(CalcError::StackUnderflow {
                op_name: op_name.to_string(),
            });
        }
        let b = self.pop(op_name)?;
        let a = self.pop(op_name)?;
        Ok((a, b))
    }

    /// Values bottom to top
    pub fn values(&self) -> &[f64] {
        &self.stack
    }

    /// Render the stack bottom to top, space separated
    pub fn format_stack(&self, precision: usize) -> String {
        self.stack
            .iter()
            .map(|v| format_value(*v, precision))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Clear the stack
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Get the stack length
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
