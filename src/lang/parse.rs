use super::ast::{Literal, Relation, Statement, Target};
use super::lex::{integer, lex, literal};
use super::token::{Argument, Word};
use super::{Error, Line, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Decode one source line. Blank lines and label lines decode to `None`.
pub fn parse(line_number: LineNumber, line: &Line) -> Result<Option<Statement>> {
    if line.is_blank() || line.is_label() {
        return Ok(None);
    }
    match Parser::parse(line.as_str()) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(Some(r)),
    }
}

struct Parser<'a> {
    word: Word,
    arg: &'a str,
}

impl<'a> Parser<'a> {
    fn parse(s: &'a str) -> Result<Statement> {
        let (keyword, arg) = match lex(s) {
            Some(pair) => pair,
            None => return Err(error!(InternalError; "BLANK LINE")),
        };
        let word = match Word::from_string(keyword) {
            Some(word) => word,
            None => return Err(error!(UnknownInstruction; keyword)),
        };
        match (word.argument(), arg.is_empty()) {
            (Argument::None, false) => {
                return Err(error!(UnknownInstruction; format!("{} TAKES NO ARGUMENT", word)))
            }
            (Argument::Required, true) if word != Word::Push => {
                return Err(error!(UnknownInstruction; format!("{} NEEDS A TARGET", word)))
            }
            _ => {}
        }
        Parser { word, arg }.statement()
    }

    fn statement(&self) -> Result<Statement> {
        use Statement::*;
        Ok(match self.word {
            Word::Add => Add,
            Word::AddK => AddK,
            Word::Div => Div,
            Word::DivK => DivK,
            Word::Empty => Empty,
            Word::Goto => Goto(self.target()),
            Word::IfEq => If(Relation::Equal, self.target()),
            Word::IfGt => If(Relation::Greater, self.target()),
            Word::IfLt => If(Relation::Less, self.target()),
            Word::IfNq => If(Relation::NotEqual, self.target()),
            Word::Mod => Mod,
            Word::ModK => ModK,
            Word::Mul => Mul,
            Word::MulK => MulK,
            Word::Peek => Peek,
            Word::PeekLn => PeekLn,
            Word::Poke => Poke,
            Word::Pop => Pop,
            Word::PopAll => PopAll,
            Word::PopAllLn => PopAllLn,
            Word::PopLn => PopLn,
            Word::Print => Print(self.optional_literal().ok_or_else(|| error!(InvalidPrintOperation))?),
            Word::Push => Push(literal(self.arg).ok_or_else(|| error!(InvalidPush))?),
            Word::QDisplay => QDisplay,
            Word::Read => Read(self.optional_literal().ok_or_else(|| error!(InvalidReadOperation))?),
            Word::Ret => Ret,
            Word::SortDown => SortDown,
            Word::SortUp => SortUp,
            Word::Sub => Sub,
            Word::SubK => SubK,
        })
    }

    fn target(&self) -> Target {
        match integer(self.arg) {
            Some(n) => Target::Line(n),
            None => Target::Label(self.arg.to_string()),
        }
    }

    /// `Some(None)` when no argument was given, `None` when it is malformed.
    fn optional_literal(&self) -> Option<Option<Literal>> {
        if self.arg.is_empty() {
            Some(None)
        } else {
            literal(self.arg).map(Some)
        }
    }
}
