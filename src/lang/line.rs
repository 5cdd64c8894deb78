use super::lex::is_qu_whitespace;
use super::{Error, LineNumber};

const DELIMITER: char = '|';

/// ## A single line of qu source

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    text: String,
}

impl Line {
    pub fn new(s: &str) -> Line {
        Line {
            text: s.trim_end_matches(&['\r', '\n'][..]).to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.chars().all(is_qu_whitespace)
    }

    /// Label lines are skipped by the dispatcher, indented or not.
    pub fn is_label(&self) -> bool {
        self.text
            .trim_start_matches(is_qu_whitespace)
            .starts_with(DELIMITER)
    }

    /// The label this line declares, if any.
    /// A line with exactly two delimiters declares the text between them.
    /// A lone delimiter is a syntax error; three or more declare nothing.
    pub fn label(&self, line_number: LineNumber) -> Result<Option<&str>, Error> {
        let mut bars = self.text.match_indices(DELIMITER).map(|(i, _)| i);
        match (bars.next(), bars.next(), bars.next()) {
            (Some(col), None, _) => Err(error!(SingleDelimiter, line_number, ..col)),
            (Some(first), Some(last), None) => Ok(Some(&self.text[first + 1..last])),
            _ => Ok(None),
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Line {
        Line::new(s)
    }
}

impl From<String> for Line {
    fn from(s: String) -> Line {
        Line::new(&s)
    }
}
