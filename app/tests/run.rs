use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use errcodes_app::{fetch_text, run, AppError, FetchError, RunOptions, Source, Summary};
use errcodes_parser::Mode;

const SAMPLE: &str = "\
# PostgreSQL error codes
Section: Class 00 - Successful Completion
00000    S    ERRCODE_SUCCESSFUL_COMPLETION                                  successful_completion
Section: Class 01 - Warning
01000    W    ERRCODE_WARNING                                                warning
01000    W    ERRCODE_WARNING_AGAIN
";

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn write_sample(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("errcodes.txt");
    std::fs::write(&path, contents).expect("write sample");
    (dir, path)
}

#[tokio::test]
async fn run_from_file_renders_enum_values() {
    let (_dir, path) = write_sample(SAMPLE);
    let options = RunOptions::new(Source::File(path), Mode::EnumValues);

    let mut out = Vec::new();
    let summary = run(&options, &mut out).await.unwrap();

    assert_eq!(
        summary,
        Summary {
            entries: 2,
            duplicates: 1
        }
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "successful_completion=0,\nwarning=46656,\n"
    );
}

#[tokio::test]
async fn malformed_catalog_writes_nothing() {
    let (_dir, path) = write_sample("00000 S ERRCODE_SUCCESSFUL_COMPLETION\n01000 W WARNING\n");
    let options = RunOptions::new(Source::File(path), Mode::SwitchCases);

    let mut out = Vec::new();
    let err = run(&options, &mut out).await.unwrap_err();

    assert!(matches!(err, AppError::Format(_)), "{err}");
    assert!(out.is_empty());
}

#[tokio::test]
async fn missing_file_is_a_fetch_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = Source::File(dir.path().join("nope.txt"));

    let err = fetch_text(&source, Duration::from_secs(1)).await.unwrap_err();
    assert!(matches!(err, FetchError::Read { .. }), "{err}");
}

#[tokio::test]
async fn run_from_url_renders_switch_cases() {
    let base = serve(Router::new().route("/errcodes.txt", get(|| async { SAMPLE }))).await;
    let options = RunOptions::new(Source::Url(format!("{base}/errcodes.txt")), Mode::SwitchCases);

    let mut out = Vec::new();
    run(&options, &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "case sqlstate::successful_completion: return \"successful_completion\";\n\
         case sqlstate::warning: return \"warning\";\n"
    );
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let base = serve(Router::new().route(
        "/errcodes.txt",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    ))
    .await;
    let url = format!("{base}/errcodes.txt");

    let err = fetch_text(&Source::Url(url.clone()), Duration::from_secs(5))
        .await
        .unwrap_err();
    match err {
        FetchError::Status { url: got, status } => {
            assert_eq!(got, url);
            assert_eq!(status, 503);
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn missing_route_is_a_fetch_error() {
    let base = serve(Router::new()).await;
    let options = RunOptions::new(Source::Url(format!("{base}/missing.txt")), Mode::EnumValues);

    let mut out = Vec::new();
    let err = run(&options, &mut out).await.unwrap_err();
    assert!(
        matches!(err, AppError::Fetch(FetchError::Status { status: 404, .. })),
        "{err}"
    );
}

#[test]
fn default_source_is_upstream_errcodes() {
    assert_eq!(Source::default().to_string(), errcodes_app::DEFAULT_URL);
}
