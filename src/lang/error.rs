use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    column: Option<Column>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    /// Errors raised below the dispatcher have no location yet.
    /// The first line number attached wins.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn in_column(self, column: Column) -> Error {
        debug_assert!(self.column.is_none());
        Error {
            column: Some(column),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SingleDelimiter = 1,
    InvalidJumpTarget = 2,
    UnresolvedJumpTarget = 3,
    NonIntegerReturnValue = 4,
    NotEnoughArguments = 5,
    UnspecifiedComparisonOperation = 6,
    ReturnFromEmptyQueue = 7,
    OperationMismatch = 8,
    InvalidPrintOperation = 9,
    InvalidReadOperation = 10,
    InvalidPush = 11,
    UnknownInstruction = 12,
    DivisionByZero = 13,
    Break = 20,
    InvalidFileExtension = 50,
    FileNotFound = 51,
    InternalError = 52,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            SingleDelimiter => "SINGLE DELIMITER",
            InvalidJumpTarget => "INVALID JUMP TARGET",
            UnresolvedJumpTarget => "UNRESOLVED JUMP TARGET",
            NonIntegerReturnValue => "NON-INTEGER RETURN VALUE",
            NotEnoughArguments => "NOT ENOUGH ARGUMENTS",
            UnspecifiedComparisonOperation => "UNSPECIFIED COMPARISON OPERATION",
            ReturnFromEmptyQueue => "RETURN FROM EMPTY QUEUE",
            OperationMismatch => "OPERATION MISMATCH",
            InvalidPrintOperation => "INVALID PRINT",
            InvalidReadOperation => "INVALID READ",
            InvalidPush => "INVALID PUSH",
            UnknownInstruction => "UNKNOWN INSTRUCTION",
            DivisionByZero => "DIVISION BY ZERO",
            Break => "BREAK",
            InvalidFileExtension => "INVALID FILE EXTENSION",
            FileNotFound => "FILE NOT FOUND",
            InternalError => "INTERNAL ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN LINE {}", line_number));
        }
        if let Some(column) = self.column {
            suffix.push_str(&format!(" AT COLUMN {}", column));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}
