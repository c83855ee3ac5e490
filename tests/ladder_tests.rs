//! Integration tests for `pathladder ladder`, `verify` and `adjacent`

#[path = "support/mod.rs"]
mod support;

use predicates::prelude::*;
use support::{pathladder, write_fixture, WORDS};
use tempfile::tempdir;

// ============================================================================
// ladder
// ============================================================================

#[test]
fn test_ladder_cat_to_dog() {
    let dir = tempdir().unwrap();
    let dict = write_fixture(dir.path(), "words.txt", WORDS);

    pathladder()
        .current_dir(dir.path())
        .args(["ladder", "cat", "dog", "--dict"])
        .arg(&dict)
        .assert()
        .success()
        .stdout("cat cot cog dog\nLadder length: 4 words\n");
}

#[test]
fn test_ladder_uses_default_dictionary_in_cwd() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    pathladder()
        .current_dir(dir.path())
        .args(["--quiet", "ladder", "cat", "dot"])
        .assert()
        .success()
        .stdout("cat cot dot\n");
}

#[test]
fn test_ladder_prompts_for_missing_words() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    pathladder()
        .current_dir(dir.path())
        .arg("ladder")
        .write_stdin("cat\ndog\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cat cot cog dog\n"))
        .stderr(predicate::str::contains("Enter start word: "))
        .stderr(predicate::str::contains("Enter end word: "));
}

#[test]
fn test_ladder_same_word_is_usage_error() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    pathladder()
        .current_dir(dir.path())
        .args(["ladder", "cat", "cat"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("start and end words are the same"))
        .stderr(predicate::str::contains("hint: a ladder needs two different words"));
}

#[test]
fn test_ladder_same_word_skips_dictionary() {
    let dir = tempdir().unwrap();

    pathladder()
        .current_dir(dir.path())
        .env_remove("PATHLADDER_LOG")
        .env_remove("RUST_LOG")
        .args(["ladder", "cat", "CAT", "--lowercase", "--dict", "missing.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("start and end words are the same: cat"))
        .stderr(predicate::str::contains("dictionary_unavailable").not());
}

#[test]
fn test_ladder_not_found() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", "cat cot zebra\n");

    pathladder()
        .current_dir(dir.path())
        .env_remove("PATHLADDER_LOG")
        .env_remove("RUST_LOG")
        .args(["ladder", "cat", "zebra"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("no ladder found from cat to zebra"))
        .stderr(predicate::str::contains("no_ladder_found").not());
}

#[test]
fn test_ladder_missing_dictionary_degrades_to_empty() {
    let dir = tempdir().unwrap();

    pathladder()
        .current_dir(dir.path())
        .args(["ladder", "cat", "dog", "--dict", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("dictionary_unavailable"))
        .stderr(predicate::str::contains("no ladder found"));
}

#[test]
fn test_ladder_lowercase() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", "CAT Cot cog DOG\n");

    pathladder()
        .current_dir(dir.path())
        .args(["--quiet", "ladder", "Cat", "dog", "--lowercase"])
        .assert()
        .success()
        .stdout("cat cot cog dog\n");
}

#[test]
fn test_ladder_json() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    let output = pathladder()
        .current_dir(dir.path())
        .args(["--format", "json", "ladder", "cat", "dog"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["begin"], "cat");
    assert_eq!(json["end"], "dog");
    assert_eq!(json["length"], 4);
    assert_eq!(json["ladder"], serde_json::json!(["cat", "cot", "cog", "dog"]));
    assert_eq!(json["violations"], serde_json::json!([]));
}

#[test]
fn test_ladder_records() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    pathladder()
        .current_dir(dir.path())
        .args(["--format", "records", "ladder", "cat", "cot"])
        .assert()
        .success()
        .stdout(
            "H pathladder=1 records=1 mode=ladder begin=cat end=cot length=2 violations=0\n\
             W cat\n\
             W cot\n",
        );
}

#[test]
fn test_ladder_same_word_json_error() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    pathladder()
        .current_dir(dir.path())
        .args(["--format", "json", "ladder", "dog", "dog"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"same_word\""));
}

// ============================================================================
// verify
// ============================================================================

#[test]
fn test_verify_valid_ladder() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    pathladder()
        .current_dir(dir.path())
        .args(["verify", "cat", "cot", "dot", "dog"])
        .assert()
        .success()
        .stdout("Ladder is valid\n");
}

#[test]
fn test_verify_reports_every_violation() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    pathladder()
        .current_dir(dir.path())
        .env_remove("PATHLADDER_LOG")
        .env_remove("RUST_LOG")
        .args(["verify", "cat", "cot", "zebra", "cot"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "repeated_word: repeated word found in ladder: cot",
        ))
        .stdout(predicate::str::contains(
            "not_in_dictionary: word not found in dictionary: zebra",
        ))
        .stdout(predicate::str::contains(
            "not_adjacent: words are not adjacent: cot -> zebra",
        ))
        .stdout(predicate::str::contains(
            "not_adjacent: words are not adjacent: zebra -> cot",
        ))
        .stderr(predicate::str::contains("invalid ladder: 4 problem(s) found"))
        .stderr(predicate::str::contains("not adjacent").not());
}

#[test]
fn test_quiet_silences_dictionary_warning() {
    let dir = tempdir().unwrap();

    pathladder()
        .current_dir(dir.path())
        .env_remove("PATHLADDER_LOG")
        .env_remove("RUST_LOG")
        .args(["--quiet", "ladder", "cat", "dog", "--dict", "missing.txt"])
        .assert()
        .code(1)
        .stderr("");
}

#[test]
fn test_verify_single_word_is_too_short() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    pathladder()
        .current_dir(dir.path())
        .args(["--format", "records", "verify", "cat"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "H pathladder=1 records=1 mode=verify valid=false length=1 violations=1",
        ))
        .stdout(predicate::str::contains("V too_short"));
}

#[test]
fn test_verify_json() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "words.txt", WORDS);

    let output = pathladder()
        .current_dir(dir.path())
        .args(["--format", "json", "verify", "cat", "dog"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["violations"][0]["kind"], "not_adjacent");
    assert_eq!(json["violations"][0]["from"], "cat");
    assert_eq!(json["violations"][0]["to"], "dog");
}

// ============================================================================
// adjacent
// ============================================================================

#[test]
fn test_adjacent() {
    let dir = tempdir().unwrap();
    for (a, b, expected) in [
        ("cat", "cot", "true\n"),
        ("cat", "cats", "true\n"),
        ("cat", "at", "true\n"),
        ("cat", "cat", "false\n"),
        ("cat", "dog", "false\n"),
    ] {
        pathladder()
            .current_dir(dir.path())
            .args(["adjacent", a, b])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_adjacent_within_distance() {
    let dir = tempdir().unwrap();
    pathladder()
        .current_dir(dir.path())
        .args(["adjacent", "kitten", "sitting", "--within", "3"])
        .assert()
        .success()
        .stdout("true\n");

    pathladder()
        .current_dir(dir.path())
        .args(["--format", "records", "adjacent", "kitten", "sitting", "--within", "2"])
        .assert()
        .success()
        .stdout(
            "H pathladder=1 records=1 mode=adjacent first=kitten second=sitting within=2 result=false\n",
        );
}
