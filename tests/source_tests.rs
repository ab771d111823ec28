mod common;

use common::{attendance_html, full_month_csv, temp_input, wrap_period_csv};
use rworkhours::config::{Config, HtmlConfig};
use rworkhours::errors::AppError;
use rworkhours::source::{
    CsvSource, DayRecordSource, HtmlTableSource, InputFormat, JsonSource, SourceFormat,
    open_source,
};
use rworkhours::utils::parse_work_time;
use rworkhours::{DayRecord, compute_bounds, sum_range};

#[test]
fn test_parse_work_time() {
    assert_eq!(parse_work_time("7:45").unwrap(), 465);
    assert_eq!(parse_work_time(" 10:05 ").unwrap(), 605);
    assert_eq!(parse_work_time("26:30").unwrap(), 1590);
    assert_eq!(parse_work_time("0:00").unwrap(), 0);
    assert_eq!(parse_work_time("").unwrap(), 0);
    assert_eq!(parse_work_time("--:--").unwrap(), 0);

    for bad in ["7", "7:5", "7:60", "a:10", "7:45:00"] {
        assert!(
            matches!(parse_work_time(bad), Err(AppError::InvalidTime(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_csv_source_with_worked_column() {
    let records = CsvSource::new(full_month_csv()).fetch_records().unwrap();
    assert_eq!(records.len(), 31);
    assert_eq!(records[0], DayRecord::new(1, 60).unwrap());
    assert_eq!(sum_range(&records, 28, 3), 420);
}

#[test]
fn test_csv_source_with_minutes_column_keeps_order() {
    let records = CsvSource::new(wrap_period_csv()).fetch_records().unwrap();
    let days: Vec<u8> = records.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![26, 27, 28, 29, 30, 31, 1, 2, 3, 4, 5]);
    assert_eq!(sum_range(&records, 26, 5), 3805);
}

#[test]
fn test_csv_source_minutes_win_over_worked_and_blank_is_zero() {
    let csv = "day,minutes,worked\n1,90,9:99\n2,,2:00\n3,,\n";
    let records = CsvSource::new(csv).fetch_records().unwrap();
    let minutes: Vec<u32> = records.iter().map(|r| r.minutes).collect();
    assert_eq!(minutes, vec![90, 120, 0]);
}

#[test]
fn test_csv_source_rejects_bad_rows() {
    let bad_day = CsvSource::new("day,minutes\n32,10\n").fetch_records();
    assert!(matches!(bad_day, Err(AppError::InvalidDay(_))));

    let bad_time = CsvSource::new("day,worked\n3,lots\n").fetch_records();
    assert!(matches!(bad_time, Err(AppError::InvalidTime(_))));

    let not_a_number = CsvSource::new("day,minutes\nfirst,10\n").fetch_records();
    assert!(matches!(not_a_number, Err(AppError::Csv(_))));
}

#[test]
fn test_json_source_accepts_array_and_export_document() {
    let rows = r#"[{"day": 26, "minutes": 480}, {"day": 1, "worked": "7:30"}, {"day": 2}]"#;
    let records = JsonSource::new(rows).fetch_records().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].minutes, 450);
    assert_eq!(records[2].minutes, 0);

    let doc = r#"{"start_day": 1, "end_day": 2, "total": "1:00",
                  "records": [{"day": 1, "minutes": 30, "worked": "0:30"},
                              {"day": 2, "minutes": 30, "worked": "0:30"}]}"#;
    let records = JsonSource::new(doc).fetch_records().unwrap();
    assert_eq!(sum_range(&records, 1, 2), 60);
}

#[test]
fn test_json_source_rejects_garbage() {
    assert!(matches!(
        JsonSource::new("{not json").fetch_records(),
        Err(AppError::Json(_))
    ));
}

#[test]
fn test_html_source_reads_attendance_table() {
    let records = HtmlTableSource::new(attendance_html(), HtmlConfig::default())
        .fetch_records()
        .unwrap();

    let pairs: Vec<(u8, u32)> = records.iter().map(|r| (r.day, r.minutes)).collect();
    assert_eq!(pairs, vec![(1, 480), (2, 465), (3, 0), (4, 0), (5, 555)]);

    let b = compute_bounds(&records);
    assert_eq!((b.min_day, b.max_day), (1, 5));
    assert_eq!(sum_range(&records, 1, 5), 1500);
}

#[test]
fn test_html_source_row_without_work_cell_counts_for_bounds() {
    let html = r#"<table id="editGraphTable"><tbody>
        <tr><td class="cellDate"><span class="date">6</span></td></tr>
        <tr><td class="cellDate"><span class="date">7</span></td><td class="view_work">1:00</td></tr>
    </tbody></table>"#;
    let records = HtmlTableSource::new(html, HtmlConfig::default())
        .fetch_records()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(compute_bounds(&records).min_day, 6);
    assert_eq!(sum_range(&records, 6, 7), 60);
}

#[test]
fn test_html_source_ignores_data_attributes() {
    let html = r#"<table data-id="other" id="editGraphTable"><tbody>
        <tr><td data-class="x" class="cellDate"><span data-class="y" class="date">7</span></td><td class="cellTime view_work">8:00</td></tr>
        <tr><td class="cellDate"><span data-class="date" class="week">(Sat)</span></td><td class="view_work">1:00</td></tr>
    </tbody></table>"#;
    let records = HtmlTableSource::new(html, HtmlConfig::default())
        .fetch_records()
        .unwrap();
    assert_eq!(records, vec![DayRecord::new(7, 480).unwrap()]);
}

#[test]
fn test_html_source_custom_selectors() {
    let html = r#"<table id="att"><tr><td class="d">9</td><td class="w total">2:30</td></tr></table>"#;
    let cfg = HtmlConfig {
        table_id: "att".into(),
        date_class: "d".into(),
        work_class: "w".into(),
    };
    let records = HtmlTableSource::new(html, cfg).fetch_records().unwrap();
    assert_eq!(records, vec![DayRecord::new(9, 150).unwrap()]);
}

#[test]
fn test_html_source_missing_table_is_an_error() {
    let res = HtmlTableSource::new("<html><body></body></html>", HtmlConfig::default())
        .fetch_records();
    assert!(matches!(res, Err(AppError::Source(_))));
}

#[test]
fn test_vec_is_a_source() {
    let v = vec![DayRecord::new(1, 5).unwrap()];
    assert_eq!(v.fetch_records().unwrap(), v);
}

#[test]
fn test_format_detection() {
    assert_eq!(
        SourceFormat::Auto.resolve("/tmp/a.CSV").unwrap(),
        InputFormat::Csv
    );
    assert_eq!(
        SourceFormat::Auto.resolve("works.htm").unwrap(),
        InputFormat::Html
    );
    assert_eq!(SourceFormat::Json.resolve("-").unwrap(), InputFormat::Json);
    assert_eq!(SourceFormat::Html.resolve("a.csv").unwrap(), InputFormat::Html);
    assert!(matches!(
        SourceFormat::Auto.resolve("-"),
        Err(AppError::Source(_))
    ));
    assert!(matches!(
        SourceFormat::Auto.resolve("data.txt"),
        Err(AppError::Source(_))
    ));
}

#[test]
fn test_open_source_reads_file() {
    let path = temp_input("open_source_html", "html", &attendance_html());
    let records = open_source(&path, SourceFormat::Auto, &Config::default())
        .unwrap()
        .fetch_records()
        .unwrap();
    assert_eq!(records.len(), 5);

    let missing = open_source("/definitely/not/here.csv", SourceFormat::Auto, &Config::default());
    assert!(matches!(missing, Err(AppError::Source(_))));
}
