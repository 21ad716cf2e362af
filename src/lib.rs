pub mod config;
pub mod events;
pub mod format;
pub mod lexer;
pub mod vm;

pub use crate::config::Config;
pub use crate::events::{Event, EventLog, LogFormat};
pub use crate::vm::{CalcError, CalcResult, Evaluator, Instruction, Snapshot};
