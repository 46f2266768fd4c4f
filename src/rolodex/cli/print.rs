use colored::Colorize;
use rolodex::api::{CmdMessage, DisplayRecord, MessageLevel};
use rolodex::model::Record;
use rolodex::schema::{Field, SCHEMA};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const STREET_WIDTH: usize = 26;
const PLACE_WIDTH: usize = 24;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_records(records: &[DisplayRecord]) {
    if records.is_empty() {
        println!("No contacts found.");
        return;
    }

    let idx_width = records
        .iter()
        .map(|dr| dr.index.to_string().len())
        .max()
        .unwrap_or(1)
        + 1;

    for dr in records {
        let idx = format!("{:>width$}.", dr.index, width = idx_width);
        println!(
            "{} {} {} {}",
            idx.yellow(),
            pad_to_width(&dr.record.display_name(), NAME_WIDTH).bold(),
            pad_to_width(&dr.record.street, STREET_WIDTH),
            pad_to_width(&place(&dr.record), PLACE_WIDTH).dimmed(),
        );
    }
}

pub(super) fn print_full_records(records: &[DisplayRecord]) {
    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            dr.index.to_string().yellow(),
            dr.record.display_name().bold()
        );
        println!("--------------------------------");
        for line in detail_lines(&dr.record) {
            println!("{}", line);
        }
    }
}

fn detail_lines(record: &Record) -> Vec<String> {
    let label_width = SCHEMA.iter().map(|spec| spec.name.len()).max().unwrap_or(0);
    SCHEMA
        .iter()
        .map(|spec| {
            let value = (spec.read)(record).unwrap_or_default();
            let value = if spec.field == Field::PostalCode && record.postal_code == 0 {
                String::new()
            } else {
                value
            };
            format!("{:<width$}  {}", spec.name, value, width = label_width)
        })
        .collect()
}

fn place(record: &Record) -> String {
    match (record.postal_code, record.city.is_empty()) {
        (0, true) => String::new(),
        (0, false) => record.city.clone(),
        (code, true) => code.to_string(),
        (code, false) => format!("{} {}", code, record.city),
    }
}

/// Truncate with an ellipsis or pad with spaces to exactly `width` columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current = 0;

    if s.width() > width {
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if current + w > width.saturating_sub(1) {
                break;
            }
            result.push(c);
            current += w;
        }
        result.push('…');
        current += 1;
    } else {
        result.push_str(s);
        current = s.width();
    }

    result.push_str(&" ".repeat(width.saturating_sub(current)));
    result
}
