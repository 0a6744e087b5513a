use crate::repl::{self, Input, InputSource};
use crate::types::ReplError;
use log::debug;
use rustyline::config::{Config, EditMode};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

// 端末からの入力. 履歴はセッション中だけ保持する
pub struct ConsoleInput {
    editor: DefaultEditor,
}

impl ConsoleInput {
    pub fn new() -> Result<Self, ReplError> {
        let config = Config::builder()
            .auto_add_history(true)
            .edit_mode(EditMode::Emacs)
            .build();
        Ok(ConsoleInput {
            editor: DefaultEditor::with_config(config)?,
        })
    }
}

impl InputSource for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> Result<Input, ReplError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err.into()),
        }
    }
}

pub fn run() -> Result<(), ReplError> {
    let mut input = ConsoleInput::new()?;
    let mut output = std::io::stdout();
    debug!("starting console session");
    repl::run_repl(&mut input, &mut output)
}
