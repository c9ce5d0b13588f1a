//! CLI tests driving the built binary

use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;

fn write_person_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn kinfolk() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kinfolk"))
}

#[test]
fn test_markdown_mode_prints_rendering_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_person_file(
        dir.path(),
        "alice.yaml",
        "---\nName: Alice\n---\nHello, {Name}!",
    );

    let output = kinfolk()
        .arg("--markdown")
        .arg(&source)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "## Alice\n\nHello, Alice!\n"
    );
}

#[test]
fn test_markdown_short_flag() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_person_file(dir.path(), "bob.yaml", "---\nName: Bob\n---\nJust Bob.");

    let output = kinfolk().arg("-m").arg(&source).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "## Bob\n\nJust Bob.\n"
    );
}

#[test]
fn test_partial_name_resolves_through_lookup() {
    let dir = tempfile::tempdir().unwrap();
    write_person_file(
        dir.path(),
        "alice.yaml",
        "---\nName: Alice\n---\nHello, {Name}!",
    );

    // "ali" names no file; the lookup collaborator finds alice.yaml.
    let output = kinfolk()
        .current_dir(dir.path())
        .arg("--markdown")
        .arg("ali")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "## Alice\n\nHello, Alice!\n"
    );
}

#[test]
fn test_missing_record_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    let output = kinfolk()
        .current_dir(dir.path())
        .arg("--markdown")
        .arg("nobody.yaml")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_malformed_document_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_person_file(dir.path(), "broken.yaml", "Name: Alice\nno fences here\n");

    let output = kinfolk()
        .arg("--markdown")
        .arg(&source)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
