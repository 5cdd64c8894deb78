use super::Address;
use crate::error;
use crate::lang::ast::Target;
use crate::lang::{Error, Line};
use std::collections::HashMap;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Label table
///
/// Built by a single forward scan before execution; read-only afterwards.

#[derive(Debug, Default)]
pub struct Link {
    labels: HashMap<String, Address>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    /// Stops at the first lone delimiter. A redefined label keeps its last line.
    pub fn scan<'a, T: IntoIterator<Item = &'a Line>>(lines: T) -> Result<Link> {
        let mut link = Link::new();
        for (addr, line) in lines.into_iter().enumerate() {
            if let Some(name) = line.label(addr)? {
                link.insert(name, addr);
            }
        }
        Ok(link)
    }

    pub fn insert(&mut self, name: &str, addr: Address) {
        if let Some(prev) = self.labels.insert(name.to_string(), addr) {
            debug!(label = name, prev, addr, "label redefined");
        } else {
            debug!(label = name, addr, "label");
        }
    }

    pub fn get(&self, name: &str) -> Option<Address> {
        self.labels.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolve a jump target to a line of a program `line_count` lines long.
    pub fn resolve(&self, target: &Target, line_count: usize) -> Result<Address> {
        match target {
            Target::Line(n) => {
                if *n >= 0 && (*n as u64) < line_count as u64 {
                    Ok(*n as Address)
                } else {
                    Err(error!(InvalidJumpTarget; n.to_string()))
                }
            }
            Target::Label(name) => match self.get(name) {
                Some(addr) => Ok(addr),
                None => Err(error!(UnresolvedJumpTarget; name.as_str())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn lines(src: &[&str]) -> Vec<Line> {
        src.iter().map(|s| Line::new(s)).collect()
    }

    #[test]
    fn test_label_binds_to_own_line() {
        let link = Link::scan(&lines(&["PUSH 1", "|LOOP|", "POP"])).unwrap();
        assert_eq!(link.get("LOOP"), Some(1));
    }

    #[test]
    fn test_last_definition_wins() {
        let link = Link::scan(&lines(&["|A|", "|B|", "|A|"])).unwrap();
        assert_eq!(link.get("A"), Some(2));
        assert_eq!(link.len(), 2);
    }

    #[test]
    fn test_lone_delimiter_aborts_scan() {
        let e = Link::scan(&lines(&["|A|", "  |", "|B|"])).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SingleDelimiter);
        assert_eq!(e.line_number(), Some(1));
        assert_eq!(e.column(), Some(2));
    }

    #[test]
    fn test_indices_within_program() {
        let src = lines(&["|A|", "", "x |B| y", "|C|D|", "|E|"]);
        let link = Link::scan(&src).unwrap();
        for name in &["A", "B", "E"] {
            assert!(link.get(name).unwrap() < src.len());
        }
        assert_eq!(link.get("C"), None);
    }

    #[test]
    fn test_resolve() {
        let link = Link::scan(&lines(&["|TOP|", "GOTO TOP"])).unwrap();
        assert_eq!(link.resolve(&Target::Label("TOP".into()), 2), Ok(0));
        assert_eq!(link.resolve(&Target::Line(1), 2), Ok(1));
        assert_eq!(
            link.resolve(&Target::Line(2), 2).unwrap_err().code(),
            ErrorCode::InvalidJumpTarget
        );
        assert_eq!(
            link.resolve(&Target::Line(-1), 2).unwrap_err().code(),
            ErrorCode::InvalidJumpTarget
        );
        assert_eq!(
            link.resolve(&Target::Label("NOPE".into()), 2)
                .unwrap_err()
                .code(),
            ErrorCode::UnresolvedJumpTarget
        );
    }
}
