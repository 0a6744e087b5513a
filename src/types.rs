use rustyline::error::ReadlineError;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }

    // 短い別名. バナーに表示する
    pub fn short_name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
        }
    }

    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Op::Add => Ok(crate::core::add(a, b)),
            Op::Sub => Ok(crate::core::subtract(a, b)),
            Op::Mul => Ok(crate::core::multiply(a, b)),
            Op::Div => crate::core::divide(a, b),
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// 正規の記号だけを受け付ける. 別名の解決はreader::normalize_operationの役目
impl FromStr for Op {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CalcError::InvalidOperation(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalcError {
    InvalidOperation(String),
    InvalidNumber(String),
    DivisionByZero,
}

impl Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::InvalidOperation(s) => write!(f, "invalid operation: {:?}", s),
            CalcError::InvalidNumber(s) => write!(f, "invalid number: {:?}", s),
            CalcError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for CalcError {}

pub type CalcResult<T> = Result<T, CalcError>;

// 入出力そのものの失敗. ループの外に伝播するのはこれだけ
#[derive(Debug)]
pub enum ReplError {
    Io(std::io::Error),
    Readline(ReadlineError),
}

impl Display for ReplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplError::Io(e) => write!(f, "io error: {}", e),
            ReplError::Readline(e) => write!(f, "readline error: {}", e),
        }
    }
}

impl std::error::Error for ReplError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplError::Io(e) => Some(e),
            ReplError::Readline(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ReplError {
    fn from(e: std::io::Error) -> Self {
        ReplError::Io(e)
    }
}

impl From<ReadlineError> for ReplError {
    fn from(e: ReadlineError) -> Self {
        ReplError::Readline(e)
    }
}
