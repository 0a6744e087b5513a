use crate::types::{CalcError, CalcResult, Op};
use fnv::FnvHashMap;
use std::sync::OnceLock;

const ALIASES: [(&str, Op); 14] = [
    ("+", Op::Add),
    ("add", Op::Add),
    ("plus", Op::Add),
    ("-", Op::Sub),
    ("sub", Op::Sub),
    ("subtract", Op::Sub),
    ("minus", Op::Sub),
    ("*", Op::Mul),
    ("mul", Op::Mul),
    ("multiply", Op::Mul),
    ("times", Op::Mul),
    ("/", Op::Div),
    ("div", Op::Div),
    ("divide", Op::Div),
];

const EXIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

// 別名表はプロセス中で一度だけ作る
fn alias_table() -> &'static FnvHashMap<&'static str, Op> {
    static TABLE: OnceLock<FnvHashMap<&'static str, Op>> = OnceLock::new();
    TABLE.get_or_init(|| ALIASES.into_iter().collect())
}

pub fn normalize_operation(raw: &str) -> CalcResult<Op> {
    alias_table()
        .get(raw.trim().to_lowercase().as_str())
        .copied()
        .ok_or_else(|| CalcError::InvalidOperation(raw.to_string()))
}

pub fn parse_number(raw: &str) -> CalcResult<f64> {
    match raw.trim() {
        "" => Err(CalcError::InvalidNumber(raw.to_string())),
        text => text
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber(raw.to_string())),
    }
}

pub fn is_exit_command(raw: &str) -> bool {
    EXIT_COMMANDS.contains(&raw.trim().to_lowercase().as_str())
}
