use std::process::Command;

use tempfile::TempDir;

fn page2pdf() -> Command {
    Command::new(env!("CARGO_BIN_EXE_page2pdf"))
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let output = page2pdf().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("For bulk processing"));
    assert!(stdout.contains("For single URL"));
}

#[test]
fn bulk_with_wrong_arity_prints_bulk_usage() {
    let output = page2pdf().args(["-b", "urls.txt"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("-b <file_with_urls.txt>"));
}

#[test]
fn missing_url_list_fails_without_creating_output_dir() {
    let temp = TempDir::new().unwrap();
    let list = temp.path().join("nope.txt");
    let out_dir = temp.path().join("out");

    let output = page2pdf()
        .arg("-b")
        .arg(&list)
        .arg(&out_dir)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("does not exist"));
    assert!(!out_dir.exists());
}

#[test]
fn single_mode_with_unreachable_url_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("out.pdf");

    let output = page2pdf()
        .arg("not a url")
        .arg(&target)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Processing single URL: not a url"));
    assert!(stdout.contains("Error fetching the webpage"));
    assert!(!target.exists());
}
