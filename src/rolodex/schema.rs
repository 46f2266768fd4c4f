//! # Field Schema
//!
//! The single table describing how each [`Record`] field maps to text. Both the
//! [`codec`](crate::codec) and [`EditSession::stage_field`](crate::session::EditSession::stage_field)
//! go through [`SCHEMA`], so the persisted format and the edit protocol can never
//! disagree about names, ordering or coercion rules.
//!
//! Each entry pairs a getter/formatter (`read`) with a parser/setter (`write`).
//! `read` returns `None` when the field should be omitted from the document,
//! which only happens for an unset birthday.

use crate::error::RolodexError;
use crate::model::Record;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Street,
    PostalCode,
    City,
    Birthday,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Street,
        Field::PostalCode,
        Field::City,
        Field::Birthday,
    ];

    /// Element name used in the XML document.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn spec(self) -> &'static FieldSpec {
        // SCHEMA is declared in the same order as the enum.
        &SCHEMA[self as usize]
    }

    pub fn from_element(name: &str) -> Option<Field> {
        SCHEMA.iter().find(|spec| spec.name == name).map(|spec| spec.field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = RolodexError;

    /// Accepts the element name (`postalCode`) as well as `postal-code` and
    /// `postal_code`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        SCHEMA
            .iter()
            .find(|spec| normalize(spec.name) == wanted)
            .map(|spec| spec.field)
            .ok_or_else(|| RolodexError::Api(format!("Unknown field: {}", s)))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

pub struct FieldSpec {
    pub field: Field,
    pub name: &'static str,
    pub read: fn(&Record) -> Option<String>,
    pub write: fn(&mut Record, &str) -> Result<(), String>,
}

impl FieldSpec {
    /// Parse `value` into `record`, naming the field in the error.
    pub fn apply(&self, record: &mut Record, value: &str) -> crate::error::Result<()> {
        (self.write)(record, value).map_err(|reason| RolodexError::InvalidField {
            field: self.name,
            value: value.to_string(),
            reason,
        })
    }
}

pub static SCHEMA: [FieldSpec; 6] = [
    FieldSpec {
        field: Field::FirstName,
        name: "firstName",
        read: |r| Some(r.first_name.clone()),
        write: |r, v| {
            r.first_name = parse_text(v)?;
            Ok(())
        },
    },
    FieldSpec {
        field: Field::LastName,
        name: "lastName",
        read: |r| Some(r.last_name.clone()),
        write: |r, v| {
            r.last_name = parse_text(v)?;
            Ok(())
        },
    },
    FieldSpec {
        field: Field::Street,
        name: "street",
        read: |r| Some(r.street.clone()),
        write: |r, v| {
            r.street = parse_text(v)?;
            Ok(())
        },
    },
    FieldSpec {
        field: Field::PostalCode,
        name: "postalCode",
        read: |r| Some(r.postal_code.to_string()),
        write: |r, v| {
            r.postal_code = parse_postal_code(v)?;
            Ok(())
        },
    },
    FieldSpec {
        field: Field::City,
        name: "city",
        read: |r| Some(r.city.clone()),
        write: |r, v| {
            r.city = parse_text(v)?;
            Ok(())
        },
    },
    FieldSpec {
        field: Field::Birthday,
        name: "birthday",
        read: |r| r.birthday.map(|d| d.format(DATE_FORMAT).to_string()),
        write: |r, v| {
            r.birthday = parse_birthday(v)?;
            Ok(())
        },
    },
];

/// XML 1.0 has no way to store C0 control characters other than tab, line
/// feed and carriage return, so they are refused before they reach a record.
fn parse_text(value: &str) -> Result<String, String> {
    match value
        .chars()
        .find(|&c| c < ' ' && !matches!(c, '\t' | '\n' | '\r'))
    {
        Some(c) => Err(format!(
            "control character U+{:04X} cannot be stored in the address book",
            c as u32
        )),
        None => Ok(value.to_string()),
    }
}

fn parse_postal_code(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err("expected a non-negative decimal integer".to_string());
    }
    trimmed.parse::<u32>().map_err(|e| e.to_string())
}

/// An empty value clears the birthday.
fn parse_birthday(value: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|e| format!("{} (expected YYYY-MM-DD)", e))
}
