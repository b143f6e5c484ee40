//! Bulk input runs through the `analyze` driver.

use std::io::Write;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use url_inspector::config::{AnalyzeArgs, Cli, Command};
use url_inspector::run_analyze;

fn analyze_args(extra: &[&str]) -> AnalyzeArgs {
    let mut argv = vec!["url_inspector", "analyze"];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Analyze(args) => args,
        other => panic!("Expected analyze, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bulk_file_skips_blank_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "https://example.com/\n\n   \nhttp://example.org/page\nnot a url\nhttps://youtube.com\n"
    )
    .unwrap();
    let path = file.path().to_string_lossy().to_string();

    let args = analyze_args(&["--format", "json", "--file", &path]);
    let mut out = Vec::new();
    let report = run_analyze(&args, &mut out, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.total, 4);
    assert_eq!(report.valid, 2);
    assert_eq!(report.invalid, 1);
    assert_eq!(report.blocked, 1);

    let lines: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    // Input order is preserved
    assert_eq!(lines[0]["original"], "https://example.com/");
    assert_eq!(lines[0]["overall_score"], 99);
    assert_eq!(lines[2]["is_valid"], false);
    assert_eq!(lines[3]["blocked"], true);
}

#[tokio::test]
async fn test_arguments_come_before_file_entries() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "https://from-file.example/").unwrap();
    let path = file.path().to_string_lossy().to_string();

    let args = analyze_args(&["https://from-args.example/", "--format", "json", "-f", &path]);
    let mut out = Vec::new();
    run_analyze(&args, &mut out, &CancellationToken::new())
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let first = text.lines().next().unwrap();
    assert!(first.contains("from-args.example"));
}

#[tokio::test]
async fn test_text_output() {
    let args = analyze_args(&["https://example.com/"]);
    let mut out = Vec::new();
    let report = run_analyze(&args, &mut out, &CancellationToken::new())
        .await
        .unwrap();
    assert!(!report.has_invalid());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("https://example.com/"));
    assert!(text.contains("Best Practices"));
}

#[tokio::test]
async fn test_missing_input_file() {
    let args = analyze_args(&["--file", "/nonexistent/urls.txt"]);
    let err = run_analyze(&args, &mut Vec::new(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read input file"));
}
