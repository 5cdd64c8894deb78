use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> =
        Word::ALL.iter().map(|w| (w.as_str(), *w)).collect();
);

/// ## Instruction keywords
///
/// Keywords are matched exactly and are case sensitive.
/// `ADDK` is never mistaken for `ADD`, nor `POPALL` for `POP`.

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Add,
    AddK,
    Div,
    DivK,
    Empty,
    Goto,
    IfEq,
    IfGt,
    IfLt,
    IfNq,
    Mod,
    ModK,
    Mul,
    MulK,
    Peek,
    PeekLn,
    Poke,
    Pop,
    PopAll,
    PopAllLn,
    PopLn,
    Print,
    Push,
    QDisplay,
    Read,
    Ret,
    SortDown,
    SortUp,
    Sub,
    SubK,
}

impl Word {
    pub const ALL: [Word; 30] = [
        Word::Add,
        Word::AddK,
        Word::Div,
        Word::DivK,
        Word::Empty,
        Word::Goto,
        Word::IfEq,
        Word::IfGt,
        Word::IfLt,
        Word::IfNq,
        Word::Mod,
        Word::ModK,
        Word::Mul,
        Word::MulK,
        Word::Peek,
        Word::PeekLn,
        Word::Poke,
        Word::Pop,
        Word::PopAll,
        Word::PopAllLn,
        Word::PopLn,
        Word::Print,
        Word::Push,
        Word::QDisplay,
        Word::Read,
        Word::Ret,
        Word::SortDown,
        Word::SortUp,
        Word::Sub,
        Word::SubK,
    ];

    pub fn from_string(s: &str) -> Option<Word> {
        STRING_TO_WORD.with(|stw| stw.get(s).copied())
    }

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Add => "ADD",
            AddK => "ADDK",
            Div => "DIV",
            DivK => "DIVK",
            Empty => "EMPTY",
            Goto => "GOTO",
            IfEq => "IFEQ",
            IfGt => "IFGT",
            IfLt => "IFLT",
            IfNq => "IFNQ",
            Mod => "MOD",
            ModK => "MODK",
            Mul => "MUL",
            MulK => "MULK",
            Peek => "PEEK",
            PeekLn => "PEEKLN",
            Poke => "POKE",
            Pop => "POP",
            PopAll => "POPALL",
            PopAllLn => "POPALLLN",
            PopLn => "POPLN",
            Print => "PRINT",
            Push => "PUSH",
            QDisplay => "QDISPLAY",
            Read => "READ",
            Ret => "RET",
            SortDown => "SORTDOWN",
            SortUp => "SORTUP",
            Sub => "SUB",
            SubK => "SUBK",
        }
    }

    /// Jumps and PUSH require an argument. PRINT and READ accept one.
    pub fn argument(&self) -> Argument {
        use Word::*;
        match self {
            Goto | IfEq | IfGt | IfLt | IfNq | Push => Argument::Required,
            Print | Read => Argument::Optional,
            _ => Argument::None,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Argument {
    None,
    Optional,
    Required,
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
