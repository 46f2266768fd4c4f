//! # XML Codec
//!
//! Converts a record sequence to and from the address book file format:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
//! <models>
//!     <model>
//!         <firstName>Hans</firstName>
//!         <lastName>Muster</lastName>
//!         <street></street>
//!         <postalCode>0</postalCode>
//!         <city></city>
//!     </model>
//! </models>
//! ```
//!
//! Field elements follow [`SCHEMA`] order. `birthday` is written only when set.
//!
//! ## Encoding
//!
//! [`encode`] is deterministic and infallible: same records, same bytes.
//!
//! ## Decoding
//!
//! [`decode`] is all-or-nothing. The root must be `models`; unknown elements are
//! skipped wherever they appear; missing fields keep their defaults. A typed
//! field (`postalCode`, `birthday`) that does not parse rejects the whole
//! document with [`RolodexError::MalformedDocument`]. Text fields keep their
//! content exactly, whitespace included.

use crate::error::{RolodexError, Result};
use crate::model::Record;
use crate::schema::{Field, SCHEMA};
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const ROOT: &str = "models";
const ENTRY: &str = "model";
const INDENT: &str = "    ";

pub fn encode(records: &[Record]) -> Vec<u8> {
    let mut out = String::with_capacity(64 + records.len() * 256);
    out.push_str(DECLARATION);
    out.push('\n');

    if records.is_empty() {
        out.push_str(&format!("<{}/>\n", ROOT));
        return out.into_bytes();
    }

    out.push_str(&format!("<{}>\n", ROOT));
    for record in records {
        out.push_str(&format!("{}<{}>\n", INDENT, ENTRY));
        for spec in SCHEMA.iter() {
            if let Some(value) = (spec.read)(record) {
                out.push_str(&format!(
                    "{indent}{indent}<{name}>{value}</{name}>\n",
                    indent = INDENT,
                    name = spec.name,
                    value = escape(value.as_str()),
                ));
            }
        }
        out.push_str(&format!("{}</{}>\n", INDENT, ENTRY));
    }
    out.push_str(&format!("</{}>\n", ROOT));
    out.into_bytes()
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Record>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| RolodexError::malformed(format!("document is not valid UTF-8: {}", e)))?;
    let mut reader = Reader::from_str(text);
    let mut records = Vec::new();

    loop {
        match next_event(&mut reader)? {
            Event::Start(e) => {
                expect_root(&e)?;
                read_entries(&mut reader, &mut records)?;
                break;
            }
            Event::Empty(e) => {
                expect_root(&e)?;
                break;
            }
            Event::Text(t) if !is_blank(&t) => {
                return Err(RolodexError::malformed("text outside the root element"));
            }
            Event::Eof => return Err(RolodexError::malformed("document has no root element")),
            _ => {}
        }
    }

    loop {
        match next_event(&mut reader)? {
            Event::Eof => break,
            Event::Start(_) | Event::Empty(_) => {
                return Err(RolodexError::malformed("content after the root element"));
            }
            Event::Text(t) if !is_blank(&t) => {
                return Err(RolodexError::malformed("content after the root element"));
            }
            _ => {}
        }
    }

    Ok(records)
}

fn next_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>> {
    reader.read_event().map_err(|e| {
        RolodexError::malformed(format!("{} (at byte {})", e, reader.buffer_position()))
    })
}

fn expect_root(start: &BytesStart<'_>) -> Result<()> {
    if start.name().as_ref() == ROOT.as_bytes() {
        Ok(())
    } else {
        Err(RolodexError::malformed(format!(
            "root element is <{}>, expected <{}>",
            String::from_utf8_lossy(start.name().as_ref()),
            ROOT
        )))
    }
}

fn read_entries(reader: &mut Reader<&[u8]>, records: &mut Vec<Record>) -> Result<()> {
    loop {
        match next_event(reader)? {
            Event::Start(e) if e.name().as_ref() == ENTRY.as_bytes() => {
                let record = read_entry(reader, records.len() + 1)?;
                records.push(record);
            }
            Event::Empty(e) if e.name().as_ref() == ENTRY.as_bytes() => {
                records.push(Record::default());
            }
            Event::Start(e) => skip(reader, &e)?,
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(RolodexError::malformed(format!(
                    "document ended inside <{}>",
                    ROOT
                )))
            }
            _ => {}
        }
    }
}

/// `position` is 1-based, for error messages.
fn read_entry(reader: &mut Reader<&[u8]>, position: usize) -> Result<Record> {
    let mut record = Record::default();
    loop {
        match next_event(reader)? {
            Event::Start(e) => match field_for(&e) {
                Some(field) => {
                    let value = read_text(reader, field)?;
                    apply(&mut record, field, &value, position)?;
                }
                None => skip(reader, &e)?,
            },
            Event::Empty(e) => {
                if let Some(field) = field_for(&e) {
                    apply(&mut record, field, "", position)?;
                }
            }
            Event::End(_) => return Ok(record),
            Event::Eof => {
                return Err(RolodexError::malformed(format!(
                    "document ended inside <{}> #{}",
                    ENTRY, position
                )))
            }
            _ => {}
        }
    }
}

fn read_text(reader: &mut Reader<&[u8]>, field: Field) -> Result<String> {
    let mut text = String::new();
    loop {
        match next_event(reader)? {
            Event::Text(t) => {
                let unescaped = t.unescape().map_err(|e| {
                    RolodexError::malformed(format!("bad text in <{}>: {}", field, e))
                })?;
                text.push_str(&unescaped);
            }
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
            Event::End(_) => return Ok(text),
            Event::Start(_) | Event::Empty(_) => {
                return Err(RolodexError::malformed(format!(
                    "unexpected element inside <{}>",
                    field
                )))
            }
            Event::Eof => {
                return Err(RolodexError::malformed(format!(
                    "document ended inside <{}>",
                    field
                )))
            }
            _ => {}
        }
    }
}

fn apply(record: &mut Record, field: Field, value: &str, position: usize) -> Result<()> {
    field
        .spec()
        .apply(record, value)
        .map_err(|e| RolodexError::malformed(format!("<{}> #{}: {}", ENTRY, position, e)))
}

fn field_for(start: &BytesStart<'_>) -> Option<Field> {
    std::str::from_utf8(start.name().as_ref())
        .ok()
        .and_then(Field::from_element)
}

fn skip(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<()> {
    reader.read_to_end(start.name()).map_err(|e| {
        RolodexError::malformed(format!(
            "unterminated <{}>: {}",
            String::from_utf8_lossy(start.name().as_ref()),
            e
        ))
    })?;
    Ok(())
}

fn is_blank(text: &[u8]) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}
