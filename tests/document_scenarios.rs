//! End-to-end scenarios run against the `dircat` binary.
//!
//! Each test builds a small tree in a temporary directory and checks the
//! exact Markdown written to stdout along with the exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn dircat() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dircat"))
}

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("mkdir");
    }
    fs::write(path, content).expect("write");
}

/// Two matching files in order, hidden directory skipped, blank line before
/// the fence of an unterminated file.
#[test]
fn python_and_markdown_scenario() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "a.py", b"print(1)\n");
    write(root, "b.md", b"# hi");
    write(root, ".git/ignored.py", b"print(2)\n");

    dircat()
        .arg(root)
        .arg("*.py,*.md")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(
            "### a.py\n\n```python\nprint(1)\n```\n\n---\n\n### b.md\n\n```markdown\n# hi\n\n```\n",
        );
}

/// Dependency directories are pruned at any depth.
#[test]
fn nested_node_modules_are_pruned() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "node_modules/lib.js", b"1\n");
    write(root, "src/node_modules/lib.js", b"2\n");
    write(root, "src/main.ts", b"export {}\n");

    dircat()
        .arg(root)
        .arg("*.js,*.ts")
        .args(["--exclude", "node_modules"])
        .assert()
        .success()
        .stdout("### src/main.ts\n\n```typescript\nexport {}\n```\n");
}

/// Exclusions by name and by relative path both veto included files.
#[test]
fn excludes_apply_to_names_and_paths() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "app.py", b"app\n");
    write(root, "test_app.py", b"test\n");
    write(root, "gen/models.py", b"gen\n");
    write(root, "lib/util.py", b"util\n");

    dircat()
        .arg(root)
        .arg("*.py")
        .args(["--exclude", "test_*", "--exclude", "gen/*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### app.py"))
        .stdout(predicate::str::contains("### lib/util.py"))
        .stdout(predicate::str::contains("test_app.py").not())
        .stdout(predicate::str::contains("gen/models.py").not());
}

/// Invalid UTF-8 content is substituted rather than failing the file.
#[test]
fn invalid_utf8_is_replaced() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(temp.path(), "data.json", b"{\"k\": \"\xff\"}\n");

    dircat()
        .arg(temp.path())
        .arg("*.json")
        .assert()
        .success()
        .stdout("### data.json\n\n```json\n{\"k\": \"\u{FFFD}\"}\n```\n");
}

/// Output is byte-identical across runs on an unchanged tree.
#[test]
fn output_is_deterministic() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    for (index, rel) in ["b/y.rs", "a/x.rs", "c.rs", "a/b/z.rs", "A.rs"]
        .iter()
        .enumerate()
    {
        write(root, rel, format!("// {index}\n").as_bytes());
    }

    let first = dircat().arg(root).arg("*.rs").output().expect("first run");
    let second = dircat().arg(root).arg("*.rs").output().expect("second run");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout).expect("utf8");
    let headings: Vec<_> = text
        .lines()
        .filter_map(|line| line.strip_prefix("### "))
        .collect();
    assert_eq!(headings, ["A.rs", "a/b/z.rs", "a/x.rs", "b/y.rs", "c.rs"]);
}

/// A file that cannot be read leaves a placeholder and does not fail the run.
#[cfg(unix)]
#[test]
fn permission_denied_file_is_reported_and_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "a.sh", b"echo a\n");
    write(root, "b.sh", b"echo b\n");
    let locked = root.join("a.sh");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
    if fs::read(&locked).is_ok() {
        // Running with privileges that ignore file modes.
        return;
    }

    let assert = dircat()
        .env_remove("RUST_LOG")
        .arg(root)
        .arg("*.sh")
        .assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).expect("restore");

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8");
    assert_eq!(stderr.lines().count(), 1, "{stderr}");

    assert
        .success()
        .stderr(predicate::str::starts_with("Error reading a.sh: "))
        .stdout(predicate::str::starts_with(
            "### a.sh\n\n```\n[Error reading file: ",
        ))
        .stdout(predicate::str::ends_with(
            "---\n\n### b.sh\n\n```bash\necho b\n```\n",
        ));
}

/// An unreadable subdirectory produces one warning line and the scan goes on.
#[cfg(unix)]
#[test]
fn unreadable_directory_warns_once() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    write(root, "locked/inner.py", b"x\n");
    write(root, "open.py", b"y\n");
    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");
        return;
    }

    let output = dircat()
        .env_remove("RUST_LOG")
        .arg(root)
        .arg("*.py")
        .output()
        .expect("run");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"### open.py\n\n```python\ny\n```\n");
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.starts_with("Warning: failed to read directory"), "{stderr}");
}

/// Verbose logging goes to stderr and leaves the document untouched.
#[test]
fn verbose_logging_does_not_touch_stdout() {
    let temp = tempfile::tempdir().expect("tempdir");
    write(temp.path(), "main.go", b"package main\n");

    dircat()
        .env_remove("RUST_LOG")
        .arg("-vv")
        .arg(temp.path())
        .arg("*.go")
        .assert()
        .success()
        .stdout("### main.go\n\n```go\npackage main\n```\n")
        .stderr(predicate::str::contains("dircat::cli"));
}
