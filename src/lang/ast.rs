/// One decoded instruction line.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Add,
    AddK,
    Div,
    DivK,
    Empty,
    Goto(Target),
    If(Relation, Target),
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
    Print(Option<Literal>),
    Push(Literal),
    QDisplay,
    Read(Option<Literal>),
    Ret,
    SortDown,
    SortUp,
    Sub,
    SubK,
}

/// Destination of `GOTO` and the `IF*` family.
#[derive(Debug, PartialEq, Clone)]
pub enum Target {
    Line(i64),
    Label(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(i64),
    String(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    Greater,
}

impl std::str::FromStr for Relation {
    type Err = super::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(Relation::Equal),
            "!=" => Ok(Relation::NotEqual),
            "<" => Ok(Relation::Less),
            ">" => Ok(Relation::Greater),
            _ => Err(error!(UnspecifiedComparisonOperation; s)),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relation::*;
        match self {
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Target::Line(n) => write!(f, "{}", n),
            Target::Label(s) => write!(f, "{}", s),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}
