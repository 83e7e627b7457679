use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const LIBRARY: &str = r#"[
    {"id": 10, "title": "Welcome", "category": "Onboarding",
     "body": "<h1>Welcome aboard</h1><p>We are <b>glad</b> you joined.</p><ul><li>Sign the letter</li><li>Send ID</li></ul>"},
    {"id": 11, "title": "Late payment", "category": "Billing", "body": "<p>Your invoice is overdue.</p>"},
    {"id": 12, "title": "Blank", "category": "Billing", "body": "   "}
]"#;

fn write_library(dir: &TempDir) -> String {
    let path = dir.path().join("templates.json");
    fs::write(&path, LIBRARY).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_convert_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("body.html");
    fs::write(&input, "<p>Hello   <i>you</i></p><p>Bye</p>").unwrap();

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Hello *you*\n\nBye\n");
}

#[test]
fn test_convert_stdin_to_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out.txt");

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["convert", "-", "--output", output.to_str().unwrap()])
        .write_stdin("a<br>b")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "a\nb");
}

#[test]
fn test_convert_with_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[format]\nbullet = \"- \"\n").unwrap();

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["--config", config.to_str().unwrap(), "convert"])
        .write_stdin("<ol><li>one</li><li>two</li></ol>")
        .assert()
        .success()
        .stdout("- one\n- two\n");
}

#[test]
fn test_convert_too_deep() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("mailtext.toml"), "[parse]\nmax_depth = 2\n").unwrap();

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .arg("convert")
        .write_stdin("<div><div><div>x</div></div></div>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nested deeper than 2 levels"));
}

#[test]
fn test_list_and_filter() {
    let temp = TempDir::new().unwrap();
    let library = write_library(&temp);

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["list", &library])
        .assert()
        .success()
        .stdout("12\tBlank (Billing)\n11\tLate payment (Billing)\n10\tWelcome (Onboarding)\n");

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["list", &library, "--category", "Onboarding"])
        .assert()
        .success()
        .stdout("10\tWelcome (Onboarding)\n");
}

#[test]
fn test_list_empty_library() {
    let temp = TempDir::new().unwrap();
    let library = temp.path().join("empty.json");
    fs::write(&library, "[]").unwrap();

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["list", library.to_str().unwrap()])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Library is empty."));
}

#[test]
fn test_list_unknown_category() {
    let temp = TempDir::new().unwrap();
    let library = write_library(&temp);

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["list", &library, "--category", "Legal"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No templates found."));
}

#[test]
fn test_categories() {
    let temp = TempDir::new().unwrap();
    let library = write_library(&temp);

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["categories", &library])
        .assert()
        .success()
        .stdout("Billing\nOnboarding\n");
}

#[test]
fn test_show_template() {
    let temp = TempDir::new().unwrap();
    let library = write_library(&temp);

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["show", &library, "10"])
        .assert()
        .success()
        .stdout(
            "Welcome\n\n**Welcome aboard**\n\nWe are **glad** you joined.\n\n• Sign the letter\n• Send ID\n",
        );
}

#[test]
fn test_show_body_only_blank() {
    let temp = TempDir::new().unwrap();
    let library = write_library(&temp);

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["show", &library, "12", "--body-only"])
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains("No content available"));
}

#[test]
fn test_show_unknown_id() {
    let temp = TempDir::new().unwrap();
    let library = write_library(&temp);

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["show", &library, "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No template with id 99"));
}

#[test]
fn test_missing_library() {
    let temp = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("mailtext")
        .current_dir(temp.path())
        .args(["list", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: IO error"));
}
