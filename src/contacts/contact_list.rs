use std::io::{self, Write};
use std::ops::Index;
use std::slice::Iter;
use log::debug;

use crate::{
    Error,
    core::Result,
};
use super::Contact;

pub const VIEW_HEADER: &str = "--- Your Contacts ---";
pub const EMPTY_NOTICE: &str = "No contacts found. Add some contacts first!";
pub const SEPARATOR_WIDTH: usize = 25;

/// The in-memory, insertion-ordered contact sequence of one session.
/// Duplicates are allowed; display numbers derive from position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    /// Appends without validation. Used when loading, where empty fields
    /// are kept as read.
    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Trims the three fields and appends a new contact. Fails with
    /// `Error::Argument` and leaves the list untouched if any field is
    /// empty after trimming.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<&Contact> {
        let (name, phone, email) = (name.trim(), phone.trim(), email.trim());
        if name.is_empty() || phone.is_empty() || email.is_empty() {
            return Err(Error::Argument(
                "All fields (name, phone, email) must be filled. Contact not added.".into()
            ));
        }

        self.contacts.push(Contact::new(name, phone, email));
        debug!("Contact '{}' appended at position {}", name, self.contacts.len());
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    /// Writes the numbered listing. Read-only.
    pub fn view<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", VIEW_HEADER)?;
        if self.contacts.is_empty() {
            writeln!(out, "{}", EMPTY_NOTICE)?;
            return Ok(());
        }

        for (i, contact) in self.contacts.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, contact)?;
        }
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

impl Index<usize> for ContactList {
    type Output = Contact;

    fn index(&self, index: usize) -> &Contact {
        &self.contacts[index]
    }
}

impl From<Vec<Contact>> for ContactList {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
