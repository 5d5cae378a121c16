use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn page_ranker_cmd() -> Command {
    Command::cargo_bin("page_ranker").unwrap()
}

fn create_corpus(dir: &TempDir) {
    let pages = [
        ("1.html", r#"<a href="2.html">2</a>"#),
        ("2.html", r#"<a href="1.html">1</a><a href="3.html">3</a>"#),
        ("3.html", r#"<a href="2.html">2</a><a href="4.html">4</a>"#),
        ("4.html", r#"<a href="2.html">2</a>"#),
    ];
    for (name, contents) in pages {
        fs::write(dir.path().join(name), contents).unwrap();
    }
}

#[test]
fn test_no_arguments_is_usage_error() {
    page_ranker_cmd()
        .assert()
        .failure()
        .stdout(predicate::str::contains("PageRank Results").not())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_two_corpora_is_usage_error() {
    page_ranker_cmd()
        .arg("corpus0")
        .arg("corpus1")
        .assert()
        .failure()
        .stdout(predicate::str::contains("PageRank Results").not());
}

#[test]
fn test_missing_corpus_fails() {
    let dir = TempDir::new().unwrap();
    page_ranker_cmd()
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("PageRank Results").not())
        .stderr(predicate::str::contains("Corpus not found"));
}

#[test]
fn test_prints_both_results() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    page_ranker_cmd()
        .arg(dir.path())
        .arg("--seed")
        .arg("11")
        .assert()
        .success()
        .stdout(predicate::str::contains("PageRank Results from Sampling (n = 10000)"))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::contains("  2.html: 0.4"));
}

#[test]
fn test_writes_json_report() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("ranks.json");

    page_ranker_cmd()
        .arg(dir.path())
        .arg("--samples")
        .arg("500")
        .arg("--output-file")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("PageRank Results from Sampling (n = 500)"));

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["samples"], 500);
    assert_eq!(report["iteration"].as_object().unwrap().len(), 4);
}

#[test]
fn test_rejects_bad_damping() {
    let dir = TempDir::new().unwrap();
    create_corpus(&dir);

    page_ranker_cmd()
        .arg(dir.path())
        .arg("--damping")
        .arg("2")
        .assert()
        .failure()
        .stdout(predicate::str::contains("PageRank Results").not());
}
