use serde::Serialize;

/// A start/end day pair.
///
/// There is no `start_day <= end_day` invariant: a start greater than the end
/// denotes a range crossing the month boundary (e.g. 26 -> 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeQuery {
    pub start_day: u8,
    pub end_day: u8,
}

impl RangeQuery {
    pub fn new(start_day: u8, end_day: u8) -> Self {
        Self { start_day, end_day }
    }

    pub fn wraps(&self) -> bool {
        self.start_day > self.end_day
    }
}
