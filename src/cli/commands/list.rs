use super::{lang_or, load_records, summarize};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summarizer::{format_hm, includes};
use crate::core::summary::{RangeSummary, calendar_dates};
use crate::errors::{AppError, AppResult};
use crate::models::DayRecord;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_minutes};
use crate::utils::date::parse_month;
use crate::utils::formatting::{bold, pad_left};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        source,
        range,
        month,
        all,
    } = cmd
    {
        let records = load_records(source, cfg)?;
        let summary = summarize(&records, range, cfg)?;

        // dates follow the whole period, so they are resolved before filtering
        let dates = match month {
            Some(m) => {
                let first = parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?;
                Some(calendar_dates(&records, first)?)
            }
            None => None,
        };

        let shown: Vec<(DayRecord, Option<NaiveDate>)> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| *all || includes(summary.bounds, summary.query, r.day))
            .map(|(i, r)| (*r, dates.as_ref().and_then(|d| d.get(i).copied())))
            .collect();

        header(summary.label(lang_or(range.lang, cfg)));
        let table = build_table(&summary, &shown, dates.is_some(), *all, cfg.separator());
        print!("{}", table.render());

        println!(
            "{} {} ({})",
            bold("Total:"),
            pad_left(&summary.total(), 6),
            mins2readable(summary.total_minutes)
        );
    }
    Ok(())
}

fn build_table(
    summary: &RangeSummary,
    shown: &[(DayRecord, Option<NaiveDate>)],
    with_dates: bool,
    mark_included: bool,
    separator: char,
) -> Table {
    let mut columns = vec![Column::right("Day")];
    if with_dates {
        columns.push(Column::left("Date"));
    }
    columns.push(Column::right("Worked"));
    if mark_included {
        columns.push(Column::left("In range"));
    }

    let mut table = Table::new(columns, separator);

    for (r, date) in shown {
        let in_range = includes(summary.bounds, summary.query, r.day);

        let day = if summary.is_after_wrap(r.day) && in_range {
            Colour::Yellow.paint(r.day.to_string()).to_string()
        } else {
            r.day.to_string()
        };

        let mut row = vec![day];
        if let Some(date) = date {
            row.push(date.format("%Y-%m-%d %a").to_string());
        }

        let worked = format_hm(u64::from(r.minutes));
        row.push(format!("{}{}{}", color_for_minutes(r.minutes), worked, RESET));

        if mark_included {
            row.push(if in_range {
                Colour::Green.paint("yes").to_string()
            } else {
                Colour::Fixed(8).paint("no").to_string()
            });
        }

        table.add_row(row);
    }

    table
}
