//! Executable instructions
//!
//! Each token of a line becomes one `Instruction`. Applying an instruction
//! mutates the session's stack and history together:
//! - pushes and operators record exactly one `Snapshot` when they succeed
//! - a failing instruction leaves both untouched, including a binary operator
//!   whose transform fails after its operands were popped
//! - `undo` consumes one snapshot, `clear` drops all of them, and neither
//!   records anything

use crate::lexer::{self, CLEAR, UNDO};
use crate::vm::errors::{CalcError, CalcResult};
use crate::vm::history::{History, Snapshot};
use crate::vm::ops::{self, BinaryOperation, Operation, UnaryOperation};
use crate::vm::stack::CalcStack;
use log::{debug, trace};

/// One unit of work derived from a token
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Push a literal onto the stack
    Push(f64),

    /// Apply a unary operation to the top of the stack
    UnaryOp {
        position: usize,
        operation: UnaryOperation,
    },

    /// Apply a binary operation to the top two values of the stack
    BinaryOp {
        position: usize,
        operation: BinaryOperation,
    },

    /// Reverse the latest recorded instruction
    Undo,

    /// Empty the stack and the history
    Clear,

    /// Token that maps to nothing
    Invalid,
}

impl Instruction {
    /// Classify a token found at 0-based `position`.
    ///
    /// Literals win over operators, operators over keywords.
    pub fn from_token(position: usize, token: &str) -> Self {
        if lexer::is_integer_literal(token) {
            return match token.parse::<f64>() {
                Ok(value) => Instruction::Push(value),
                Err(_) => Instruction::Invalid,
            };
        }
        if let Some(operation) = ops::resolve_binary(token) {
            return Instruction::BinaryOp {
                position,
                operation,
            };
        }
        if let Some(operation) = ops::resolve_unary(token) {
            return Instruction::UnaryOp {
                position,
                operation,
            };
        }
        match token {
            UNDO => Instruction::Undo,
            CLEAR => Instruction::Clear,
            _ => Instruction::Invalid,
        }
    }

    /// Apply the instruction to `stack`, recording its reversal in `history`
    pub fn apply(&self, stack: &mut CalcStack, history: &mut History) -> CalcResult<()> {
        debug!("Applying {:?}", self);
        match self {
            Instruction::Push(value) => {
                stack.push(*value);
                history.record(Snapshot::Push);
                Ok(())
            }

            Instruction::UnaryOp {
                position,
                operation,
            } => {
                if stack.len() < operation.arity() {
                    return Err(CalcError::insufficient(operation, *position));
                }
                let operand = stack.pop(operation.symbol())?;
                for result in operation.apply(operand) {
                    stack.push(result);
                }
                history.record(Snapshot::Unary {
                    operand,
                    result_count: operation.result_count(),
                });
                Ok(())
            }

            Instruction::BinaryOp {
                position,
                operation,
            } => {
                if stack.len() < operation.arity() {
                    return Err(CalcError::insufficient(operation, *position));
                }
                let (operand_a, operand_b) = stack.pop_two(operation.symbol())?;
                match operation.apply(operand_a, operand_b) {
                    Ok(results) => {
                        for result in results {
                            stack.push(result);
                        }
                        history.record(Snapshot::Binary {
                            operand_a,
                            operand_b,
                            result_count: operation.result_count(),
                        });
                        Ok(())
                    }
                    Err(err) => {
                        // Put the operands back so the failed operator has no effect
                        stack.push(operand_a);
                        stack.push(operand_b);
                        Err(err)
                    }
                }
            }

            Instruction::Undo => {
                if let Some(snapshot) = history.pop() {
                    trace!("Reverting snapshot {:?}", snapshot);
                    snapshot.revert(stack);
                }
                Ok(())
            }

            Instruction::Clear => {
                stack.clear();
                history.clear();
                Ok(())
            }

            Instruction::Invalid => Err(CalcError::UndefinedInstruction),
        }
    }
}
