//! Snapshot history for undo
//!
//! Every successfully applied push or operator leaves one `Snapshot` in the
//! `History`. A snapshot holds just enough to reverse its instruction: how many
//! results to discard and which operands to put back. `undo` and `clear` never
//! record a snapshot, so they cannot themselves be undone.

use crate::vm::stack::CalcStack;
use log::trace;
use serde::{Deserialize, Serialize};

/// Reversal record for one applied instruction
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Snapshot {
    /// A literal was pushed; undo discards it
    Push,

    /// A unary operator consumed `operand`
    Unary { operand: f64, result_count: usize },

    /// A binary operator consumed `operand_a` then `operand_b` (the former top)
    Binary {
        operand_a: f64,
        operand_b: f64,
        result_count: usize,
    },
}

impl Snapshot {
    /// Number of values the recorded instruction left on the stack
    pub fn result_count(&self) -> usize {
        match self {
            Snapshot::Push => 1,
            Snapshot::Unary { result_count, .. } | Snapshot::Binary { result_count, .. } => {
                *result_count
            }
        }
    }

    /// Reverse the recorded instruction on `stack`.
    ///
    /// Discards up to `result_count()` values, stopping early if the stack
    /// runs dry, then puts the consumed operands back in their original order.
    pub fn revert(&self, stack: &mut CalcStack) {
        for _ in 0..self.result_count() {
            if stack.pop("undo").is_err() {
                break;
            }
        }

        match self {
            Snapshot::Push => {}
            Snapshot::Unary { operand, .. } => stack.push(*operand),
            Snapshot::Binary {
                operand_a,
                operand_b,
                ..
            } => {
                stack.push(*operand_a);
                stack.push(*operand_b);
            }
        }
    }
}

/// LIFO log of snapshots since session start or the last `clear`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Record a snapshot
    pub fn record(&mut self, snapshot: Snapshot) {
        trace!("Recording snapshot {:?}", snapshot);
        self.snapshots.push(snapshot);
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    /// Snapshots oldest first
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[f64]) -> CalcStack {
        let mut stack = CalcStack::new();
        for v in values {
            stack.push(*v);
        }
        stack
    }

    #[test]
    fn test_revert_each_variant() {
        let cases = vec![
            (
                2.0,
                Snapshot::Binary {
                    operand_a: 6.0,
                    operand_b: 3.0,
                    result_count: 1,
                },
                vec![6.0, 3.0],
            ),
            (
                36.0,
                Snapshot::Unary {
                    operand: 6.0,
                    result_count: 1,
                },
                vec![6.0],
            ),
            (1.0, Snapshot::Push, vec![]),
        ];

        for (result, snapshot, expected) in cases {
            let mut stack = stack_of(&[result]);
            snapshot.revert(&mut stack);
            assert_eq!(stack.values(), expected.as_slice(), "{:?}", snapshot);
        }
    }

    #[test]
    fn test_revert_leaves_older_values() {
        let mut stack = stack_of(&[9.0, 2.0]);
        Snapshot::Unary {
            operand: 4.0,
            result_count: 1,
        }
        .revert(&mut stack);
        assert_eq!(stack.values(), &[9.0, 4.0]);
    }

    #[test]
    fn test_revert_multi_result() {
        let mut stack = stack_of(&[7.0, 1.0, 2.0, 3.0]);
        Snapshot::Binary {
            operand_a: 10.0,
            operand_b: 20.0,
            result_count: 3,
        }
        .revert(&mut stack);
        assert_eq!(stack.values(), &[7.0, 10.0, 20.0]);
    }

    #[test]
    fn test_revert_stops_on_short_stack() {
        let mut stack = stack_of(&[5.0]);
        Snapshot::Binary {
            operand_a: 1.0,
            operand_b: 2.0,
            result_count: 3,
        }
        .revert(&mut stack);
        assert_eq!(stack.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_history_is_lifo() {
        let mut history = History::new();
        history.record(Snapshot::Push);
        history.record(Snapshot::Unary {
            operand: 4.0,
            result_count: 1,
        });
        assert_eq!(history.len(), 2);
        assert!(matches!(history.pop(), Some(Snapshot::Unary { .. })));
        assert_eq!(history.pop(), Some(Snapshot::Push));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }
}
