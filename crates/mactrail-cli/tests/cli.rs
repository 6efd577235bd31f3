//! End-to-end checks of the mactrail binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn mactrail() -> Command {
    Command::cargo_bin("mactrail").unwrap()
}

/// A stomped document next to an unremarkable one: access predates
/// creation and all four timestamps cluster inside 1.9 seconds.
const TIMELINE: &str = "\
time,type,path,partition,inode,size,deleted
2022-12-31T23:59:59Z,ATIME,/home/user/doc.txt,part0,11,100,false
2023-01-01T00:00:00Z,CRTIME,/home/user/doc.txt,part0,11,100,false
2023-01-01T00:00:00.5Z,MTIME,/home/user/doc.txt,part0,11,100,false
2023-01-01T00:00:00.9Z,CTIME,/home/user/doc.txt,part0,11,100,false
2023-06-01T10:00:00Z,MTIME,/home/user/notes.md,part0,12,50,false
";

fn write_timeline(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("timeline.csv");
    std::fs::write(&path, TIMELINE).unwrap();
    path
}

#[test]
fn help_lists_commands() {
    mactrail()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("extract")
                .and(predicate::str::contains("analyze"))
                .and(predicate::str::contains("report")),
        );
}

#[test]
fn analyze_flags_stomped_document() {
    let dir = tempfile::tempdir().unwrap();
    let timeline = write_timeline(dir.path());

    mactrail()
        .args(["analyze", timeline.to_str().unwrap(), "--output", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Access before creation")
                .and(predicate::str::contains("Rapid timestamp activity (<2s)")),
        );
}

#[test]
fn suspicious_only_hides_clean_records() {
    let dir = tempfile::tempdir().unwrap();
    let timeline = write_timeline(dir.path());

    mactrail()
        .args([
            "analyze",
            timeline.to_str().unwrap(),
            "--suspicious-only",
            "--output",
            "json",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("/home/user/doc.txt")
                .and(predicate::str::contains("/home/user/notes.md").not()),
        );
}

#[test]
fn analyze_rejects_missing_columns() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.csv");
    std::fs::write(&broken, "time,type,partition,inode,size,deleted\n").unwrap();

    mactrail()
        .args(["analyze", broken.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path"));
}

#[test]
fn extract_then_report_produces_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let tree = dir.path().join("tree");
    std::fs::create_dir(&tree).unwrap();
    std::fs::write(tree.join("a.txt"), b"evidence").unwrap();

    let timeline = dir.path().join("timeline.csv");
    mactrail()
        .args([
            "extract",
            tree.to_str().unwrap(),
            "--out",
            timeline.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&timeline).unwrap();
    assert!(written.starts_with("time,type,path,partition,inode,size,deleted"));
    assert!(written.contains("a.txt"));

    let report = dir.path().join("report.html");
    mactrail()
        .args([
            "report",
            timeline.to_str().unwrap(),
            "--view",
            "events",
            "--out",
            report.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("Raw Timeline Events"));
    assert!(html.contains("a.txt"));
}

#[test]
fn report_suspicious_view_from_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let timeline = write_timeline(dir.path());
    let report = dir.path().join("suspicious.html");

    mactrail()
        .args([
            "report",
            timeline.to_str().unwrap(),
            "--out",
            report.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("/home/user/doc.txt"));
    assert!(!html.contains("/home/user/notes.md"));
}
