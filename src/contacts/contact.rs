use std::fmt;

/// Field separator of the on-disk record line.
pub const FIELD_SEPARATOR: char = ',';

/// A name/phone/email triple. Contacts carry no identifier; a contact is
/// known only by its position in a [`ContactList`](super::ContactList).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name    : String,
    phone   : String,
    email   : String,
}

impl Contact {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Self {
            name    : name.to_string(),
            phone   : phone.to_string(),
            email   : email.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The record line without its terminator. Fields are written as-is, so
    /// a field containing the separator will not read back as one record.
    pub fn to_record(&self) -> String {
        format!("{}{sep}{}{sep}{}",
            self.name,
            self.phone,
            self.email,
            sep = FIELD_SEPARATOR
        )
    }

    /// Parses one trimmed, non-blank record line. Returns `None` unless the
    /// line splits into exactly three fields.
    pub fn from_record(line: &str) -> Option<Self> {
        let parts = line.split(FIELD_SEPARATOR).collect::<Vec<&str>>();
        match parts.as_slice() {
            [name, phone, email] => Some(Self::new(
                name.trim(),
                phone.trim(),
                email.trim()
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Phone: {}, Email: {}",
            self.name,
            self.phone,
            self.email
        )
    }
}
