//! End-to-end analyzer behavior over on-disk project trees.
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use funclen::analyzer::Analyzer;
use funclen::settings::LengthSettings;
use tempfile::{tempdir, TempDir};

const LONG_FUNCTION: &str = "\
def long_one():
    a = 1
    b = 2
    c = 3
    return a + b + c
";

const SHORT_FUNCTION: &str = "\
def short_one():
    return 1
";

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn strict_analyzer() -> Analyzer {
    Analyzer::new(LengthSettings {
        max_length: 2,
        ..Default::default()
    })
}

fn project() -> TempDir {
    tempdir().unwrap()
}

#[test]
fn walks_directories_and_flags_long_functions() {
    let dir = project();
    let root = dir.path();
    write_file(&root.join("pkg/long.py"), LONG_FUNCTION);
    write_file(&root.join("pkg/short.py"), SHORT_FUNCTION);

    let result = strict_analyzer().analyze(&[root.to_path_buf()]);

    assert!(result.parse_errors.is_empty());
    assert_eq!(result.files_analyzed, 2);
    assert_eq!(result.findings.len(), 1);
    assert!(result.findings[0]
        .file
        .to_string_lossy()
        .ends_with("long.py"));
    assert_eq!(result.findings[0].message, "Function too long (4 > 2)");
}

#[test]
fn explicit_file_paths_are_processed_directly() {
    let dir = project();
    let file = dir.path().join("one.py");
    write_file(&file, LONG_FUNCTION);

    let result = strict_analyzer().analyze(&[file]);

    assert_eq!(result.files_analyzed, 1);
    assert_eq!(result.findings.len(), 1);
}

#[test]
fn findings_come_out_in_sorted_file_order() {
    let dir = project();
    let root = dir.path();
    write_file(&root.join("b.py"), LONG_FUNCTION);
    write_file(&root.join("a.py"), LONG_FUNCTION);

    let result = strict_analyzer().analyze(&[root.to_path_buf()]);

    let files: Vec<String> = result
        .findings
        .iter()
        .map(|f| f.file.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files, vec!["a.py", "b.py"]);
}

#[test]
fn default_folders_are_pruned() {
    let dir = project();
    let root = dir.path();
    write_file(&root.join("app.py"), LONG_FUNCTION);
    write_file(&root.join("build/generated.py"), LONG_FUNCTION);
    write_file(&root.join("__pycache__/cached.py"), LONG_FUNCTION);

    let result = strict_analyzer().analyze(&[root.to_path_buf()]);

    assert_eq!(result.files_analyzed, 1);
    assert_eq!(result.findings.len(), 1);
}

#[test]
fn configured_folders_are_pruned() {
    let dir = project();
    let root = dir.path();
    write_file(&root.join("app.py"), LONG_FUNCTION);
    write_file(&root.join("generated/skipme.py"), LONG_FUNCTION);

    let analyzer = strict_analyzer().with_exclude_folders(vec!["generated".to_owned()]);
    let result = analyzer.analyze(&[root.to_path_buf()]);

    assert_eq!(result.findings.len(), 1);
    assert!(result.findings[0].file.to_string_lossy().ends_with("app.py"));
}

#[test]
fn non_python_files_are_ignored() {
    let dir = project();
    let root = dir.path();
    write_file(&root.join("app.py"), SHORT_FUNCTION);
    write_file(&root.join("notes.txt"), "def fake():\n    pass\n");

    let result = strict_analyzer().analyze(&[root.to_path_buf()]);

    assert_eq!(result.files_analyzed, 1);
}

#[test]
fn syntax_errors_become_parse_errors_without_aborting() {
    let dir = project();
    let root = dir.path();
    write_file(&root.join("broken.py"), "def broken(:\n");
    write_file(&root.join("fine.py"), LONG_FUNCTION);

    let result = strict_analyzer().analyze(&[root.to_path_buf()]);

    assert_eq!(result.parse_errors.len(), 1);
    assert!(result.parse_errors[0]
        .file
        .to_string_lossy()
        .ends_with("broken.py"));
    assert_eq!(result.files_analyzed, 1);
    assert_eq!(result.findings.len(), 1);
}

#[test]
fn clean_run_produces_no_findings() {
    let dir = project();
    let root = dir.path();
    write_file(&root.join("ok.py"), SHORT_FUNCTION);

    let result = Analyzer::new(LengthSettings::default()).analyze(&[root.to_path_buf()]);

    assert!(result.findings.is_empty());
    assert!(result.parse_errors.is_empty());
    assert_eq!(result.files_analyzed, 1);
}
