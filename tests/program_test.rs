mod common;
use common::*;
use qu::lang::ErrorCode;
use qu::mach::{Event, Runtime};

fn exit_value(src: &[&str]) -> Option<i64> {
    match exec_n(&mut runtime(src), 5000).1 {
        Event::Exit(n) => Some(n),
        _ => None,
    }
}

#[test]
fn test_count_with_label_loop() {
    let src = [
        "PUSH 0",
        "|LOOP|",
        "PUSH 1",
        "ADD",
        "PEEKLN",
        "PUSH 3",
        "IFEQ END",
        "SUB",
        "PUSH 3",
        "ADD",
        "GOTO LOOP",
        "|END|",
    ];
    assert_eq!(exec(&src), "1\n2\n3\n");
}

#[test]
fn test_count_with_indented_label_loop() {
    let src = [
        "PUSH 0",
        "  |LOOP|",
        "PUSH 1",
        "ADD",
        "PEEKLN",
        "PUSH 3",
        "IFEQ END",
        "SUB",
        "PUSH 3",
        "ADD",
        "GOTO LOOP",
        "\t|END|",
    ];
    assert_eq!(exec(&src), "1\n2\n3\n");
}

#[test]
fn test_ret() {
    assert_eq!(exit_value(&["PUSH 7", "RET", "PRINT \"NOT REACHED\""]), Some(7));
    assert_eq!(exit_value(&["PUSH -1", "RET"]), Some(-1));
    assert_eq!(exit_value(&["PUSH 1"]), Some(0));
    assert_eq!(exit_value(&[]), Some(0));
}

#[test]
fn test_ret_errors() {
    assert_eq!(exec(&["RET"]), "?RETURN FROM EMPTY QUEUE IN LINE 0\n");
    assert_eq!(
        exec(&["PUSH \"x\"", "RET"]),
        "?NON-INTEGER RETURN VALUE IN LINE 1\n"
    );
}

#[test]
fn test_unknown_instruction() {
    assert_eq!(
        exec(&["PRINT 1", "JUMP 3"]),
        "1\n?UNKNOWN INSTRUCTION IN LINE 1; JUMP\n"
    );
    assert_eq!(
        exec(&["PUSHX 1"]),
        "?UNKNOWN INSTRUCTION IN LINE 0; PUSHX\n"
    );
}

#[test]
fn test_single_delimiter_rejects_program() {
    let mut runtime = Runtime::default();
    let error = runtime.load(vec!["PRINT 1", "|OOPS"]).unwrap_err();
    assert_eq!(error.code(), ErrorCode::SingleDelimiter);
    assert_eq!(error.to_string(), "SINGLE DELIMITER IN LINE 1 AT COLUMN 0");
    assert_eq!(runtime.execute(10), Event::Stopped);
}

#[test]
fn test_last_label_wins() {
    let src = ["GOTO A", "|A|", "PRINT 1", "|A|", "PRINT 2"];
    assert_eq!(exec(&src), "2\n");
}

#[test]
fn test_jump_targets() {
    assert_eq!(exec(&["GOTO 2", "PRINT 1", "PRINT 2"]), "2\n");
    assert_eq!(exec(&["GOTO 3"]), "?INVALID JUMP TARGET IN LINE 0; 3\n");
    assert_eq!(
        exec(&["GOTO MISSING"]),
        "?UNRESOLVED JUMP TARGET IN LINE 0; MISSING\n"
    );
}

#[test]
fn test_conditional_keeps_queue() {
    let mut r = runtime(&["PUSH 1", "PUSH 2", "IFLT 4", "PRINT \"NO\"", "QDISPLAY"]);
    assert_eq!(exec_n(&mut r, 5000).0, "1, 2\n");
}

#[test]
fn test_read_input() {
    let mut r = runtime(&["READ \"? \"", "PUSH 1", "ADD", "POPLN"]);
    let (out, event) = exec_n(&mut r, 5000);
    assert_eq!(out, "");
    assert_eq!(event, Event::Input("? ".to_string()));
    r.enter_input("41");
    assert_eq!(exec_n(&mut r, 5000).0, "42\n");
}

#[test]
fn test_runaway_program_can_be_interrupted() {
    let mut r = runtime(&["|A|", "GOTO A"]);
    let (out, event) = exec_n(&mut r, 100);
    assert!(out.ends_with("100 Execution cycles exceeded.\n"));
    assert_eq!(event, Event::Running);
    r.interrupt();
    match r.execute(100) {
        Event::Error(error) => assert_eq!(error.code(), ErrorCode::Break),
        event => panic!("unexpected {:?}", event),
    }
}
