//! RPN execution and undo engine
//!
//! This module contains the stack, the operation registry, the instruction
//! set with its snapshot history, and the evaluator that ties them together.

mod errors;
mod evaluator;
mod history;
mod instruction;
pub mod ops;
mod stack;

pub use errors::{CalcError, CalcResult};
pub use evaluator::Evaluator;
pub use history::{History, Snapshot};
pub use instruction::Instruction;
pub use ops::{BinaryOperation, Operation, UnaryOperation};
pub use stack::CalcStack;
