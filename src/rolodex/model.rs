//! # Domain Model
//!
//! A [`Record`] is one contact: a name, a postal address and an optional
//! birthday. Records carry no identity of their own; inside a
//! [`RecordCollection`](crate::collection::RecordCollection) they are addressed
//! by position only, so two records with equal fields are still distinct entries.
//!
//! Records do no validation. Type coercion happens at the edges, when a value is
//! staged through an [`EditSession`](crate::session::EditSession) or decoded by
//! the [`codec`](crate::codec).

use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub postal_code: u32,
    pub city: String,
    pub birthday: Option<NaiveDate>,
}

impl Record {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn with_postal_code(mut self, postal_code: u32) -> Self {
        self.postal_code = postal_code;
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// "First Last", skipping whichever half is empty.
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}

/// The contacts a fresh address book starts with.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Hans", "Muster"),
        Record::new("Ruth", "Mueller"),
        Record::new("Heinz", "Kurz"),
        Record::new("Cornelia", "Meier"),
    ]
}
