//! # qu
//!
//! A line-oriented language with no variables. Every value lives in one
//! first-in first-out queue.
//!
//! Run a program with `qu program.qu`. The file name must end in `.qu`.
//! ```text
//! $ qu hello.qu
//! Hello World
//! ```
//!
//! Errors are reported with a zero-based line number and end the program
//! with exit status 255. `RET` ends it with a status of its own choosing.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
