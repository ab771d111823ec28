#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, pointed at a config file that never exists so the
/// user's own configuration cannot leak into the tests.
pub fn rwh() -> Command {
    let mut cmd = cargo_bin_cmd!("rworkhours");
    cmd.args(["--config", &missing_config()]);
    cmd
}

pub fn missing_config() -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push("rworkhours_tests_missing.conf");
    path.to_string_lossy().to_string()
}

/// Write `content` to a unique file inside the system temp dir and return its path
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours_in.{}", name, ext));
    fs::write(&path, content).expect("write test input");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Days 1..=31, one hour each
pub fn full_month_csv() -> String {
    let mut s = String::from("day,worked\n");
    for d in 1..=31 {
        s.push_str(&format!("{d},1:00\n"));
    }
    s
}

/// A pay period from the 26th to the 5th, as the attendance page lists it
pub fn wrap_period_csv() -> String {
    "day,minutes\n\
     26,480\n27,450\n28,0\n29,0\n30,465\n31,480\n\
     1,480\n2,0\n3,500\n4,480\n5,470\n"
        .to_string()
}

/// Saved attendance page with a header row, a weekend and one empty cell
pub fn attendance_html() -> String {
    r#"<!DOCTYPE html>
<html><head><title>Works</title></head>
<body>
<div id="main">
<table id="editGraphTable" class="table">
  <thead>
    <tr><th class="cellDate">Date</th><th class="cellTime cellTime07 cellBreak view_work">Worked</th></tr>
  </thead>
  <tbody>
    <tr class="weekday">
      <td class="cellDate"><span class="date">1</span><span class="week">(Mon)</span></td>
      <td class="cellTime cellTime07 cellBreak view_work">8:00</td>
    </tr>
    <tr class="weekday">
      <td class="cellDate"><span class="date">02</span><span class="week">(Tue)</span></td>
      <td class="cellTime cellTime07 cellBreak view_work"> 7:45 </td>
    </tr>
    <tr class="holiday">
      <td class="cellDate"><span class="date">3</span><span class="week">(Wed)</span></td>
      <td class="cellTime cellTime07 cellBreak view_work">0:00</td>
    </tr>
    <tr class="weekday">
      <td class="cellDate"><span class="date">4</span><span class="week">(Thu)</span></td>
      <td class="cellTime cellTime07 cellBreak view_work">&nbsp;</td>
    </tr>
    <tr class="weekday">
      <td class="cellDate"><span class="date">5</span><span class="week">(Fri)</span></td>
      <td class="cellTime cellTime07 cellBreak view_work"><span>9:15</span></td>
    </tr>
    <tr class="summary"><td colspan="2">Summary row without a date</td></tr>
  </tbody>
</table>
</div>
</body></html>
"#
    .to_string()
}
