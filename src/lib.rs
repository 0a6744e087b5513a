pub mod console;
pub mod core;
pub mod printer;
pub mod reader;
pub mod repl;
pub mod types;

pub use crate::core::{add, calculate, divide, multiply, subtract};
pub use crate::reader::{normalize_operation, parse_number};
pub use crate::repl::{run_repl, InputSource, OutputSink, ScriptedInput};
pub use crate::types::{CalcError, CalcResult, Op, ReplError};
