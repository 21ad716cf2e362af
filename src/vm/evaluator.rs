//! Line evaluator
//!
//! The `Evaluator` owns one session's stack and history and drives every line
//! through them:
//! - the whole line is validated before anything runs
//! - each token becomes an `Instruction`, applied in order
//! - the first failing instruction stops the line; everything applied before
//!   it stays applied
//!
//! One evaluator serves exactly one session. Hosts that need several sessions
//! create one evaluator each.

use crate::format::DEFAULT_PRECISION;
use crate::lexer;
use crate::vm::errors::{CalcError, CalcResult};
use crate::vm::history::{History, Snapshot};
use crate::vm::instruction::Instruction;
use crate::vm::stack::CalcStack;
use log::debug;

/// RPN evaluator with per-instruction undo
#[derive(Debug, Clone)]
pub struct Evaluator {
    /// Operand stack
    stack: CalcStack,

    /// Reversal records, one per applied push or operator
    history: History,

    /// Fractional digits used by `render_stack`
    precision: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Create an evaluator with an empty stack and history
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    /// Create an evaluator rendering `precision` fractional digits
    pub fn with_precision(precision: usize) -> Self {
        Self {
            stack: CalcStack::new(),
            history: History::new(),
            precision,
        }
    }

    /// Evaluate one input line.
    ///
    /// `None` stands for a missing line and is rejected like an empty one.
    /// On error the stack reflects every instruction applied before the
    /// failing token.
    pub fn evaluate(&mut self, line: Option<&str>) -> CalcResult<()> {
        let line = match line {
            Some(line) if lexer::validate(line) => line,
            _ => return Err(CalcError::IllegalFormat),
        };

        for (position, token) in lexer::tokenize(line).into_iter().enumerate() {
            let instruction = Instruction::from_token(position, token);
            if let Err(err) = instruction.apply(&mut self.stack, &mut self.history) {
                debug!("Line aborted at token {} ({:?}): {}", position, token, err);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Render the stack bottom to top
    pub fn render_stack(&self) -> String {
        self.stack.format_stack(self.precision)
    }

    /// Empty the stack and the history
    pub fn reset_all(&mut self) {
        self.stack.clear();
        self.history.clear();
    }

    /// Current stack values, bottom first
    pub fn stack(&self) -> &[f64] {
        self.stack.values()
    }

    /// Recorded snapshots, oldest first
    pub fn history(&self) -> &[Snapshot] {
        self.history.snapshots()
    }

    pub fn precision(&self) -> usize {
        self.precision
    }
}
