use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::{IsTerminal, Write};

/// What came back from a READ prompt.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Line(String),
    Eof,
    Interrupt,
}

/// Line editing when a person is typing, plain buffered reads otherwise.
pub enum Input {
    Terminal(Interface<DefaultTerminal>),
    Piped,
}

impl Input {
    pub fn new() -> Input {
        if std::io::stdin().is_terminal() {
            match Interface::new("qu") {
                Ok(interface) => {
                    interface.set_report_signal(Signal::Interrupt, true);
                    return Input::Terminal(interface);
                }
                Err(error) => tracing::warn!(%error, "line editing unavailable"),
            }
        }
        Input::Piped
    }

    pub fn read_line(&mut self, prompt: &str) -> std::io::Result<Reply> {
        match self {
            Input::Terminal(interface) => {
                interface.set_prompt(prompt)?;
                match interface.read_line()? {
                    ReadResult::Input(string) => Ok(Reply::Line(string)),
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        Ok(Reply::Interrupt)
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => Ok(Reply::Eof),
                }
            }
            Input::Piped => {
                let mut stdout = std::io::stdout();
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;
                let mut string = String::new();
                if std::io::stdin().read_line(&mut string)? == 0 {
                    return Ok(Reply::Eof);
                }
                Ok(Reply::Line(
                    string.trim_end_matches(&['\r', '\n'][..]).to_string(),
                ))
            }
        }
    }
}
