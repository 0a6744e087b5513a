use crate::printer::{self, FIRST_NUMBER_PROMPT, GOODBYE, OPERATION_PROMPT, SECOND_NUMBER_PROMPT};
use crate::reader;
use crate::types::{CalcError, Op, ReplError};
use log::{debug, trace};
use std::collections::VecDeque;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Interrupted, // Ctrl-C
    Eof,         // Ctrl-D または入力の終わり
}

pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ReplError>;
}

pub trait OutputSink {
    fn write_line(&mut self, text: &str) -> Result<(), ReplError>;
}

// プロンプトを受け取って次の行を返す関数. Noneは入力の終わり
impl<F> InputSource for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn read_line(&mut self, prompt: &str) -> Result<Input, ReplError> {
        Ok(self(prompt).map_or(Input::Eof, Input::Line))
    }
}

impl<W: Write> OutputSink for W {
    fn write_line(&mut self, text: &str) -> Result<(), ReplError> {
        writeln!(self, "{}", text)?;
        self.flush()?;
        Ok(())
    }
}

// 決められた行を順に返す入力. 尋ねられたプロンプトを記録する
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<Input>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(|s| Input::Line(s.into())).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn push(&mut self, input: Input) {
        self.lines.push_back(input);
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ReplError> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or(Input::Eof))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    AwaitOperation,
    AwaitFirstOperand(Op),
    AwaitSecondOperand(Op, f64),
    Compute(Op, f64, f64),
    EmitResult(f64),
    Exit,
}

fn report<O>(output: &mut O, err: &CalcError) -> Result<State, ReplError>
where
    O: OutputSink + ?Sized,
{
    debug!("{}", err);
    output.write_line(&printer::pr_error(err))?;
    Ok(State::AwaitOperation)
}

fn read_operand<I, O, F>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
    next: F,
) -> Result<State, ReplError>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
    F: FnOnce(f64) -> State,
{
    match input.read_line(prompt)? {
        Input::Line(line) => {
            trace!("read {:?}", line);
            match reader::parse_number(&line) {
                Ok(n) => {
                    debug!("operand {}", n);
                    Ok(next(n))
                }
                // 片方が不正なら二つとも捨ててやり直す
                Err(e) => report(output, &e),
            }
        }
        Input::Interrupted => Ok(State::AwaitOperation),
        Input::Eof => Ok(State::Exit),
    }
}

pub fn run_repl<I, O>(input: &mut I, output: &mut O) -> Result<(), ReplError>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    for line in printer::banner() {
        output.write_line(&line)?;
    }

    let mut state = State::AwaitOperation;
    loop {
        state = match state {
            State::AwaitOperation => match input.read_line(OPERATION_PROMPT)? {
                Input::Line(line) => {
                    trace!("read {:?}", line);
                    if reader::is_exit_command(&line) {
                        State::Exit
                    } else {
                        match reader::normalize_operation(&line) {
                            Ok(op) => {
                                debug!("operation {}", op);
                                State::AwaitFirstOperand(op)
                            }
                            Err(e) => report(output, &e)?,
                        }
                    }
                }
                Input::Interrupted => State::AwaitOperation,
                Input::Eof => State::Exit,
            },
            State::AwaitFirstOperand(op) => {
                read_operand(input, output, FIRST_NUMBER_PROMPT, |a| {
                    State::AwaitSecondOperand(op, a)
                })?
            }
            State::AwaitSecondOperand(op, a) => {
                read_operand(input, output, SECOND_NUMBER_PROMPT, |b| {
                    State::Compute(op, a, b)
                })?
            }
            State::Compute(op, a, b) => match op.apply(a, b) {
                Ok(n) => {
                    debug!("{} {} {} = {}", a, op, b, n);
                    State::EmitResult(n)
                }
                Err(e) => report(output, &e)?,
            },
            State::EmitResult(n) => {
                output.write_line(&printer::pr_result(n))?;
                State::AwaitOperation
            }
            State::Exit => {
                debug!("session end");
                output.write_line(GOODBYE)?;
                return Ok(());
            }
        }
    }
}
