use std::io::Write;
use log::{debug, info};

use crate::{
    Error,
    core::Result,
    contacts::{
        ContactList,
        LoadStatus,
        Store,
    },
};
use super::{
    menu::{self, Choice},
    reader::LineReader,
};

pub const ADD_HEADER: &str = "--- Add New Contact ---";
pub const NAME_PROMPT: &str = "Enter contact name: ";
pub const PHONE_PROMPT: &str = "Enter contact phone number: ";
pub const EMAIL_PROMPT: &str = "Enter contact email: ";

pub const SAVED: &str = "Contacts saved successfully!";
pub const RELOADED: &str = "Contacts reloaded from file.";
pub const FAREWELL: &str = "Exiting Contact Manager. Goodbye!";
pub const INTERRUPTED: &str = "Goodbye!";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Exited,
}

/// One interactive run of the contact manager. The session owns the
/// in-memory contact list and threads it through every operation.
pub struct Session<R, W> {
    store   : Store,
    contacts: ContactList,
    reader  : R,
    out     : W,
    state   : State,
}

impl<R: LineReader, W: Write> Session<R, W> {
    pub fn new(store: Store, reader: R, out: W) -> Self {
        Self {
            store,
            contacts: ContactList::new(),
            reader,
            out,
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn contacts(&self) -> &ContactList {
        &self.contacts
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Loads the store, then runs the menu loop until the session exits.
    pub fn run(&mut self) -> Result<()> {
        if self.state == State::Exited {
            return Err(Error::State("Session has already exited".into()));
        }

        self.contacts = self.load()?;
        while self.state == State::Running {
            self.step()?;
        }
        Ok(())
    }

    /// One menu iteration: show the menu, read a choice and dispatch it.
    pub fn step(&mut self) -> Result<State> {
        if self.state == State::Exited {
            return Err(Error::State("Session has already exited".into()));
        }

        menu::display_menu(&mut self.out)?;
        match self.prompt(menu::CHOICE_PROMPT)? {
            Some(input) => self.dispatch(&input)?,
            None => self.interrupt()?,
        }
        Ok(self.state)
    }

    pub fn dispatch(&mut self, input: &str) -> Result<()> {
        if self.state == State::Exited {
            return Err(Error::State("Session has already exited".into()));
        }

        let Some(choice) = Choice::parse(input) else {
            debug!("Rejected menu input {:?}", input);
            writeln!(self.out, "{}", INVALID_CHOICE)?;
            return Ok(());
        };

        debug!("Menu choice: {}", choice.label());
        match choice {
            Choice::Add => self.add(),
            Choice::View => self.view(),
            Choice::Save => self.save(),
            Choice::Load => self.reload(),
            Choice::Exit => self.exit(),
        }
    }

    fn add(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", ADD_HEADER)?;

        let mut fields = Vec::with_capacity(3);
        for prompt in [NAME_PROMPT, PHONE_PROMPT, EMAIL_PROMPT] {
            match self.prompt(prompt)? {
                Some(v) => fields.push(v.trim().to_string()),
                None => return self.interrupt(),
            }
        }

        match self.contacts.add(&fields[0], &fields[1], &fields[2]) {
            Ok(contact) => writeln!(self.out, "Contact '{}' added.", contact.name())?,
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(())
    }

    fn view(&mut self) -> Result<()> {
        self.contacts.view(&mut self.out)?;
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        match self.store.save(&self.contacts) {
            Ok(_) => writeln!(self.out, "{}", SAVED)?,
            Err(e) => writeln!(self.out, "Error saving contacts: {}", e)?,
        }
        Ok(())
    }

    /// Replaces the in-memory list with the file contents. Unsaved
    /// additions are lost.
    fn reload(&mut self) -> Result<()> {
        self.contacts = self.load()?;
        writeln!(self.out, "{}", RELOADED)?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        writeln!(self.out, "{}", FAREWELL)?;
        self.save()?;
        self.state = State::Exited;
        info!("Session exited with {} contacts", self.contacts.len());
        Ok(())
    }

    // End of input ends the session without saving.
    fn interrupt(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", INTERRUPTED)?;
        self.state = State::Exited;
        info!("Session interrupted, {} contacts left unsaved", self.contacts.len());
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.out.flush()?;
        match self.reader.read_line(prompt) {
            Ok(line) => Ok(line),
            Err(e) => {
                writeln!(self.out, "Error reading input: {}", e)?;
                Ok(None)
            }
        }
    }

    fn load(&mut self) -> Result<ContactList> {
        let loaded = self.store.load();
        let path = self.store.path().display();

        for line in loaded.malformed.iter() {
            writeln!(self.out, "Skipping malformed line in {}: {}", path, line)?;
        }
        match loaded.status {
            LoadStatus::Loaded => {},
            LoadStatus::Missing => writeln!(self.out,
                "'{}' not found. Starting with an empty contact list.", path
            )?,
            LoadStatus::Failed(e) => writeln!(self.out,
                "Error loading contacts from '{}': {}. Starting with an empty contact list; \
                saving will overwrite the file.", path, e
            )?,
        }
        Ok(loaded.contacts)
    }
}
