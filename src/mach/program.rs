use super::{Address, Link};
use crate::lang::ast::{Statement, Target};
use crate::lang::{parse, Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// ## Source lines and their labels
///
/// Lines are kept as text and decoded when the dispatcher reaches them.

#[derive(Debug, Default)]
pub struct Program {
    lines: Vec<Line>,
    link: Link,
}

impl Program {
    /// Runs the label pass. No line executes if it fails.
    pub fn new<T: IntoIterator<Item = S>, S: Into<Line>>(source: T) -> Result<Program> {
        let lines: Vec<Line> = source.into_iter().map(Into::into).collect();
        let link = Link::scan(&lines)?;
        Ok(Program { lines, link })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, addr: Address) -> Option<&Line> {
        self.lines.get(addr)
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    /// `Ok(None)` past the end and for lines that are skipped.
    pub fn statement(&self, addr: Address) -> Result<Option<Statement>> {
        match self.lines.get(addr) {
            Some(line) => parse(addr, line),
            None => Ok(None),
        }
    }

    pub fn resolve(&self, target: &Target) -> Result<Address> {
        self.link.resolve(target, self.len())
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = self.len().saturating_sub(1).to_string().len();
        for (addr, line) in self.lines.iter().enumerate() {
            writeln!(f, "{:>w$} {}", addr, line, w = width)?;
        }
        Ok(())
    }
}
