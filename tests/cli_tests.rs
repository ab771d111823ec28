use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::{attendance_html, full_month_csv, rwh, temp_input, wrap_period_csv};

#[test]
fn test_sum_full_period_by_default() {
    let input = temp_input("sum_default", "csv", &full_month_csv());

    rwh()
        .args(["sum", &input])
        .assert()
        .success()
        .stdout(contains("Total worked for days 1-31: 31:00"));
}

#[test]
fn test_sum_wrap_range_with_start_and_end() {
    let input = temp_input("sum_wrap", "csv", &full_month_csv());

    rwh()
        .args(["sum", &input, "--start", "28", "--end", "3"])
        .assert()
        .success()
        .stdout(contains("days 28-31 and 1-3: 7:00"));
}

#[test]
fn test_sum_compact_range_in_japanese() {
    let input = temp_input("sum_ja", "csv", &wrap_period_csv());

    rwh()
        .args(["sum", &input, "--range", "26:5", "--lang", "ja"])
        .assert()
        .success()
        .stdout(contains(
            "26日から31日まで、および1日から5日までの総労働時間: 63:25",
        ));
}

#[test]
fn test_sum_html_attendance_page() {
    let input = temp_input("sum_html", "html", &attendance_html());

    rwh()
        .args(["sum", &input, "-s", "2", "-e", "5"])
        .assert()
        .success()
        .stdout(contains("days 2-5: 17:00"));
}

#[test]
fn test_sum_reads_stdin_with_explicit_format() {
    rwh()
        .args(["sum", "-", "--format", "csv", "--range", "1:2"])
        .write_stdin("day,worked\n1,1:15\n2,0:50\n3,8:00\n")
        .assert()
        .success()
        .stdout(contains("days 1-2: 2:05"));
}

#[test]
fn test_sum_stdin_without_format_fails() {
    rwh()
        .args(["sum", "-"])
        .write_stdin("day,worked\n1,1:15\n")
        .assert()
        .failure()
        .stderr(contains("explicit --format"));
}

#[test]
fn test_sum_out_of_bounds_is_rejected() {
    let input = temp_input("sum_oob", "html", &attendance_html());

    rwh()
        .args(["sum", &input, "--start", "1", "--end", "6"])
        .assert()
        .failure()
        .stderr(contains("Invalid range").and(contains("(1..5)")))
        .stdout(contains("Total worked").not());
}

#[test]
fn test_sum_out_of_bounds_is_reported_in_japanese() {
    let input = temp_input("sum_oob_ja", "html", &attendance_html());

    rwh()
        .args(["sum", &input, "--start", "0", "--end", "5", "--lang", "ja"])
        .assert()
        .failure()
        .stderr(contains("エラー: 有効な日にちを入力してください (1〜5)"))
        .stderr(contains("Invalid range").not());
}

#[test]
fn test_sum_non_integer_day_is_rejected() {
    let input = temp_input("sum_nan", "csv", &full_month_csv());

    rwh()
        .args(["sum", &input, "--start", "first"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_sum_empty_period_reports_no_data() {
    let input = temp_input("sum_empty", "csv", "day,minutes\n");

    rwh()
        .args(["sum", &input])
        .assert()
        .failure()
        .stderr(contains("No attendance data"));
}

#[test]
fn test_bounds_prints_period() {
    let input = temp_input("bounds_wrap", "csv", &wrap_period_csv());

    rwh()
        .args(["bounds", &input])
        .assert()
        .success()
        .stdout(contains("First day : 1"))
        .stdout(contains("Last day  : 31"))
        .stdout(contains("Days      : 11"))
        .stdout(contains("Worked    : 63:25"));
}

#[test]
fn test_bounds_empty_period_warns() {
    let input = temp_input("bounds_empty", "json", "[]");

    rwh()
        .args(["bounds", &input])
        .assert()
        .success()
        .stdout(contains("No attendance data found"));
}

#[test]
fn test_list_shows_only_days_in_range() {
    let input = temp_input("list_range", "csv", &wrap_period_csv());

    rwh()
        .args(["list", &input, "--range", "30:1"])
        .assert()
        .success()
        .stdout(contains("days 30-31 and 1-1"))
        .stdout(contains("23:45"))
        .stdout(contains("7:50").not());
}

#[test]
fn test_list_with_month_shows_calendar_dates() {
    let input = temp_input("list_month", "csv", &wrap_period_csv());

    rwh()
        .args(["list", &input, "--range", "26:5", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("2025-01-31"))
        .stdout(contains("2025-02-05"));
}

#[test]
fn test_list_month_dates_follow_period_order() {
    let input = temp_input("list_month_order", "csv", &wrap_period_csv());

    // default query covers the whole period, days after the 31st are February
    rwh()
        .args(["list", &input, "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("2025-01-26"))
        .stdout(contains("2025-02-01"))
        .stdout(contains("2025-02-05"))
        .stdout(contains("2025-01-01").not())
        .stdout(contains("2025-01-05").not());

    // days outside the range still get the month they belong to
    rwh()
        .args(["list", &input, "--range", "28:2", "--all", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("2025-01-26"))
        .stdout(contains("2025-02-02"))
        .stdout(contains("2025-02-03"))
        .stdout(contains("2025-01-03").not());
}

#[test]
fn test_list_all_marks_days_outside_range() {
    let input = temp_input("list_all", "html", &attendance_html());

    rwh()
        .args(["list", &input, "--start", "1", "--end", "2", "--all"])
        .assert()
        .success()
        .stdout(contains("In range"))
        .stdout(contains("9:15"))
        .stdout(contains("15:45"));
}

#[test]
fn test_list_bad_month_fails() {
    let input = temp_input("list_bad_month", "csv", &full_month_csv());

    rwh()
        .args(["list", &input, "--month", "January"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let mut path = env::temp_dir();
    path.push("rworkhours_init_test_mode.conf");
    let cfg = path.to_string_lossy().to_string();
    fs::remove_file(&cfg).ok();

    assert_cmd::cargo_bin_cmd!("rworkhours")
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));

    assert!(!path.exists());
}

#[test]
fn test_init_then_config_language_is_used() {
    let mut path = env::temp_dir();
    path.push("rworkhours_init_lang.conf");
    let cfg = path.to_string_lossy().to_string();
    fs::remove_file(&cfg).ok();

    assert_cmd::cargo_bin_cmd!("rworkhours")
        .args(["--config", &cfg, "init"])
        .assert()
        .success();

    let content = fs::read_to_string(&path).expect("config written");
    assert!(content.contains("language: en"));
    assert!(content.contains("table_id: editGraphTable"));

    fs::write(&path, content.replace("language: en", "language: ja")).unwrap();

    let input = temp_input("config_lang", "csv", &full_month_csv());
    assert_cmd::cargo_bin_cmd!("rworkhours")
        .args(["--config", &cfg, "sum", &input, "-s", "1", "-e", "2"])
        .assert()
        .success()
        .stdout(contains("1日から2日までの総労働時間: 2:00"));

    assert_cmd::cargo_bin_cmd!("rworkhours")
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("language: ja"));
}

#[test]
fn test_invalid_config_is_reported() {
    let mut path = env::temp_dir();
    path.push("rworkhours_invalid.conf");
    fs::write(&path, "separator_char: \"==\"\n").unwrap();
    let cfg = path.to_string_lossy().to_string();

    let input = temp_input("invalid_config", "csv", &full_month_csv());
    assert_cmd::cargo_bin_cmd!("rworkhours")
        .args(["--config", &cfg, "sum", &input])
        .assert()
        .failure()
        .stderr(contains("separator_char"));
}
