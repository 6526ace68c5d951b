mod util;

use odrs_reviews::app::{execute, Console};
use odrs_reviews::client::parse_reviews;
use odrs_reviews::cli::USAGE;
use odrs_reviews::error::{EXIT_FETCH, EXIT_OK, EXIT_OUTPUT, EXIT_USAGE};
use odrs_reviews::{ReviewError, TimeConvention};
use std::fs;
use tempfile::TempDir;
use util::{FakeSource, RecordingOpener, sample_review};

struct Captured {
    code: i32,
    out: String,
    err: String,
}

fn run_cli(argv: &[&str], source: &FakeSource, opener: &RecordingOpener) -> Captured {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = {
        let mut console = Console {
            out: &mut out,
            err: &mut err,
            styled: false,
        };
        execute(argv.iter().copied(), |_args| Ok(source), opener, &mut console)
    };

    Captured {
        code,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

#[test]
fn test_invalid_output_type_makes_no_request() {
    let source = FakeSource::returning(vec![sample_review(1)]);
    let opener = RecordingOpener::default();

    let result = run_cli(&["odrs-reviews", "org.gnome.Maps.desktop", "xml"], &source, &opener);

    assert_eq!(result.code, EXIT_USAGE);
    assert!(result.err.contains(USAGE));
    assert!(result.out.is_empty());
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn test_wrong_argument_count_makes_no_request() {
    let opener = RecordingOpener::default();

    for argv in [
        vec!["odrs-reviews"],
        vec!["odrs-reviews", "org.gnome.Maps.desktop"],
        vec!["odrs-reviews", "org.gnome.Maps.desktop", "csv", "extra"],
    ] {
        let source = FakeSource::returning(vec![]);
        let result = run_cli(&argv, &source, &opener);

        assert_eq!(result.code, EXIT_USAGE);
        assert!(result.err.contains(USAGE));
        assert_eq!(source.calls.get(), 0);
    }
}

#[test]
fn test_csv_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("reviews");
    let body = r#"[{"app_id": "org.gnome.Maps.desktop", "date_created": "1700000000",
        "description": "Great maps", "distro": "Fedora", "karma_down": 1, "karma_up": 3,
        "locale": "en_GB", "rating": 80, "reported": 0, "review_id": 42,
        "summary": "Good", "user_display": "Jane", "version": "45.0"}]"#;
    let reviews = parse_reviews(body, TimeConvention::Utc).expect("Failed to parse body");
    let source = FakeSource::returning(reviews);
    let opener = RecordingOpener::default();

    let result = run_cli(
        &[
            "odrs-reviews",
            "org.gnome.Maps.desktop",
            "csv",
            "--output-dir",
            out_dir.to_str().unwrap(),
        ],
        &source,
        &opener,
    );

    assert_eq!(result.code, EXIT_OK, "stderr: {}", result.err);
    assert_eq!(source.calls.get(), 1);
    assert!(result.out.starts_with("Reviews written to: "));
    assert!(opener.opened.borrow().is_empty());

    let written = fs::read_to_string(out_dir.join("org.gnome.Maps.desktop.csv"))
        .expect("CSV report missing");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);

    // Karma Up, Karma Down, Rating, Review ID appear in column order.
    let row = lines[1];
    let karma_up = row.find(",3,").unwrap();
    let karma_down = row.find(",1,").unwrap();
    let rating = row.find(",80,").unwrap();
    let review_id = row.find(",42,").unwrap();
    assert!(karma_up < karma_down && karma_down < rating && rating < review_id);
    assert!(row.starts_with("2023-11-14 22:13:20,"));
}

#[test]
fn test_html_writes_then_opens() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("reviews");
    let source = FakeSource::returning(vec![sample_review(1), sample_review(2)]);
    let opener = RecordingOpener::default();

    let result = run_cli(
        &[
            "odrs-reviews",
            "org.gnome.Maps.desktop",
            "html",
            "--output-dir",
            out_dir.to_str().unwrap(),
        ],
        &source,
        &opener,
    );

    assert_eq!(result.code, EXIT_OK, "stderr: {}", result.err);
    let opened = opener.opened.borrow();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].ends_with("org.gnome.Maps.desktop.html"));

    let html = fs::read_to_string(&opened[0]).expect("HTML report missing");
    assert_eq!(html.matches(r#"<table class="uk-table"#).count(), 2);
}

#[test]
fn test_html_no_open() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source = FakeSource::returning(vec![]);
    let opener = RecordingOpener::default();

    let result = run_cli(
        &[
            "odrs-reviews",
            "org.gnome.Maps.desktop",
            "html",
            "--no-open",
            "--output-dir",
            temp_dir.path().to_str().unwrap(),
        ],
        &source,
        &opener,
    );

    assert_eq!(result.code, EXIT_OK);
    assert!(temp_dir.path().join("org.gnome.Maps.desktop.html").exists());
    assert!(opener.opened.borrow().is_empty());
}

#[test]
fn test_table_prints_to_stdout_and_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("reviews");
    let source = FakeSource::returning(vec![sample_review(7)]);
    let opener = RecordingOpener::default();

    let result = run_cli(
        &[
            "odrs-reviews",
            "org.gnome.Maps.desktop",
            "table",
            "--output-dir",
            out_dir.to_str().unwrap(),
        ],
        &source,
        &opener,
    );

    assert_eq!(result.code, EXIT_OK);
    assert!(result.out.contains(" Review ID: 7"));
    assert!(result.out.contains(" Up/Down: 3/1"));
    assert!(!out_dir.exists());
}

#[test]
fn test_fetch_failure_exits_with_fetch_code_and_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("reviews");
    let source = FakeSource::failing(ReviewError::Status {
        url: "https://odrs.gnome.org/1.0/reviews/api/app/org.gnome.Maps.desktop".into(),
        status: 500,
    });
    let opener = RecordingOpener::default();

    let result = run_cli(
        &[
            "odrs-reviews",
            "org.gnome.Maps.desktop",
            "csv",
            "--output-dir",
            out_dir.to_str().unwrap(),
        ],
        &source,
        &opener,
    );

    assert_eq!(result.code, EXIT_FETCH);
    assert!(result.err.starts_with("error: review service returned HTTP 500"));
    assert!(!out_dir.exists());
}

#[test]
fn test_write_failure_exits_with_output_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("reviews");
    fs::write(&blocker, "not a directory").expect("Failed to write blocker");
    let source = FakeSource::returning(vec![sample_review(1)]);
    let opener = RecordingOpener::default();

    let result = run_cli(
        &[
            "odrs-reviews",
            "org.gnome.Maps.desktop",
            "csv",
            "--output-dir",
            blocker.to_str().unwrap(),
        ],
        &source,
        &opener,
    );

    assert_eq!(result.code, EXIT_OUTPUT);
    assert!(result.err.starts_with("error: failed to write"));
}
