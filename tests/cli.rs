mod common;

use std::process::{Command, Output};

use common::page_server::{self, Page};
use tempfile::TempDir;

fn web2txt(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_web2txt"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("run web2txt")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn dir_is_empty(dir: &TempDir) -> bool {
    std::fs::read_dir(dir.path()).unwrap().next().is_none()
}

#[test]
fn no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    let output = web2txt(&dir, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage: web2txt <URL>"), "{}", stdout(&output));
}

#[test]
fn too_many_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    let output = web2txt(&dir, &["example.com", "out.txt", "extra"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage: web2txt <URL>"));
    assert!(dir_is_empty(&dir));
}

#[test]
fn not_found_reports_on_stdout_and_exits_1() {
    let url = page_server::start(Page::status(404, "Not Found"));
    let dir = TempDir::new().unwrap();
    let output = web2txt(&dir, &["--no-progress", &url, "out.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Error: Could not retrieve content from"), "{out}");
    assert!(out.contains("Not Found"), "{out}");
    assert!(out.contains("404"), "{out}");
    assert!(dir_is_empty(&dir));
}

#[test]
fn invalid_url_reports_on_stdout() {
    let dir = TempDir::new().unwrap();
    let output = web2txt(&dir, &["--no-progress", "   "]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Error: Invalid URL."));
}

#[test]
fn good_page_is_saved_and_exits_0() {
    let html = "<html><head><script>var x = 1;</script></head>\
                <body><h1>Welcome</h1><p>Hello  World</p></body></html>";
    let url = page_server::start(Page::html(html));
    let dir = TempDir::new().unwrap();
    let output = web2txt(&dir, &["--no-progress", &url, "page.txt"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains(&format!("Fetching URL: {url}...")), "{out}");
    assert!(out.contains(&format!("Successfully saved text from {url} to page.txt.")), "{out}");

    let saved = std::fs::read_to_string(dir.path().join("page.txt")).unwrap();
    assert_eq!(saved, "Welcome Hello World");
}
