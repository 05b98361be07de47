use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use log::{debug, info, warn};

use crate::{
    Error,
    core::Result,
};
use super::{
    Contact,
    ContactList,
};

/// How a [`Store::load`] ended. None of these is fatal; every outcome
/// comes with a usable (possibly empty) list.
#[derive(Debug)]
pub enum LoadStatus {
    Loaded,
    Missing,
    Failed(Error),
}

#[derive(Debug)]
pub struct Loaded {
    pub contacts    : ContactList,
    /// Trimmed lines dropped for not having exactly three fields, in file order.
    pub malformed   : Vec<String>,
    pub status      : LoadStatus,
}

/// The flat-file boundary of the contact list: one `name,phone,email`
/// record per line, no header, no escaping.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Loaded {
        let fp = match File::open(&self.path) {
            Ok(fp) => fp,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("Contacts file {} not found, starting empty", self.path.display());
                return Loaded {
                    contacts: ContactList::new(),
                    malformed: Vec::new(),
                    status: LoadStatus::Missing,
                };
            }
            Err(e) => {
                warn!("Failed to open contacts file {} with error: {e}", self.path.display());
                return Self::failed(Error::from(e));
            }
        };

        match parse(BufReader::new(fp)) {
            Ok((contacts, malformed)) => {
                info!("Loaded {} contacts from {} ({} malformed lines skipped)",
                    contacts.len(),
                    self.path.display(),
                    malformed.len()
                );
                Loaded {
                    contacts,
                    malformed,
                    status: LoadStatus::Loaded,
                }
            },
            Err(e) => {
                warn!("Failed to read contacts file {} with error: {e}", self.path.display());
                Self::failed(e)
            }
        }
    }

    /// Truncates the file and writes every contact. Not atomic: a failure
    /// part-way leaves whatever was already written.
    pub fn save(&self, contacts: &ContactList) -> Result<usize> {
        let fp = File::create(&self.path).map_err(|e| {
            warn!("Failed to create contacts file {} with error: {e}", self.path.display());
            Error::from(e)
        })?;

        write(BufWriter::new(fp), contacts).map_err(|e| {
            warn!("Failed to write contacts file {} with error: {e}", self.path.display());
            Error::from(e)
        })?;

        info!("Saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(contacts.len())
    }

    fn failed(err: Error) -> Loaded {
        Loaded {
            contacts: ContactList::new(),
            malformed: Vec::new(),
            status: LoadStatus::Failed(err),
        }
    }
}

/// Reads records from `reader`. Lines end at `\n`, `\r\n` or a bare `\r`.
/// Blank lines are skipped; lines that do not split into exactly three
/// fields are returned as malformed instead of being loaded.
pub fn parse<R: BufRead>(mut reader: R) -> Result<(ContactList, Vec<String>)> {
    let mut contacts = ContactList::new();
    let mut malformed = Vec::new();

    let mut data = String::new();
    reader.read_to_string(&mut data)?;

    // "\r\n" yields an extra blank piece, skipped below.
    for line in data.split(['\n', '\r']) {
        let cleaned = line.trim();
        if cleaned.is_empty() {
            continue;
        }

        match Contact::from_record(cleaned) {
            Some(contact) => contacts.push(contact),
            None => {
                debug!("Skipping malformed record: {}", cleaned);
                malformed.push(cleaned.to_string());
            }
        }
    }
    Ok((contacts, malformed))
}

pub fn write<W: Write>(mut writer: W, contacts: &ContactList) -> io::Result<()> {
    for contact in contacts {
        writeln!(writer, "{}", contact.to_record())?;
    }
    writer.flush()
}
