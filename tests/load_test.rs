use qu::lang::ErrorCode;
use qu::term::load;
use std::path::PathBuf;

fn scratch(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("qu-load-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_lines() {
    let path = scratch("hello.qu", "PUSH 1\r\nPOPLN\n\nRET");
    let lines = load(&path).unwrap();
    assert_eq!(lines, vec!["PUSH 1", "POPLN", "", "RET"]);
}

#[test]
fn test_extension_is_checked_first() {
    let path = scratch("hello.txt", "PRINT 1");
    assert_eq!(
        load(&path).unwrap_err().code(),
        ErrorCode::InvalidFileExtension
    );
    let missing = PathBuf::from("no/such/dir/program.bas");
    assert_eq!(
        load(&missing).unwrap_err().code(),
        ErrorCode::InvalidFileExtension
    );
}

#[test]
fn test_missing_file() {
    let path = PathBuf::from("no/such/dir/program.qu");
    let error = load(&path).unwrap_err();
    assert_eq!(error.code(), ErrorCode::FileNotFound);
    assert!(error.to_string().starts_with("FILE NOT FOUND; "));
}
