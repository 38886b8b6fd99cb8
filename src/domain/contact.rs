use super::{bounded_text, Record};
use crate::errors::StoreError;
use crate::store::codec::{put_text, FieldReader};

pub const CONTACT_CAPACITY: usize = 200;
pub const CONTACT_TEXT_MAX: usize = 49;

const TEXT_WIDTH: usize = CONTACT_TEXT_MAX + 1;

/// One entry in the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name: bounded_text(name, CONTACT_TEXT_MAX),
            phone: bounded_text(phone, CONTACT_TEXT_MAX),
            email: bounded_text(email, CONTACT_TEXT_MAX),
        }
    }
}

impl Record for Contact {
    const ENCODED_LEN: usize = TEXT_WIDTH * 3;

    fn encode(&self, buf: &mut Vec<u8>) {
        put_text(buf, &self.name, TEXT_WIDTH);
        put_text(buf, &self.phone, TEXT_WIDTH);
        put_text(buf, &self.email, TEXT_WIDTH);
    }

    fn decode(bytes: &[u8]) -> Result<Self, StoreError> {
        let mut reader = FieldReader::new(bytes);
        let name = reader.read_text(TEXT_WIDTH)?;
        let phone = reader.read_text(TEXT_WIDTH)?;
        let email = reader.read_text(TEXT_WIDTH)?;
        reader.finish()?;
        Ok(Self { name, phone, email })
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.phone, &self.email]
    }
}

/// Partial update for a contact. `None` fields keep their prior value; an
/// empty prompt entry maps to `None` upstream, never to "set to empty".
#[derive(Debug, Default, Clone)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    pub fn apply(self, contact: &mut Contact) {
        if let Some(name) = self.name {
            contact.name = bounded_text(&name, CONTACT_TEXT_MAX);
        }
        if let Some(phone) = self.phone {
            contact.phone = bounded_text(&phone, CONTACT_TEXT_MAX);
        }
        if let Some(email) = self.email {
            contact.email = bounded_text(&email, CONTACT_TEXT_MAX);
        }
    }
}
