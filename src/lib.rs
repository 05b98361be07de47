pub mod core;
pub mod contacts;
pub mod shell;

pub use crate::core::{
    error::{self, Error},
    config::{self, Config},
    logger,
    default_configuration as configuration,
};

pub use crate::contacts::{
    contact::{self, Contact},
    contact_list::{self, ContactList},
    store::{self, Store, Loaded, LoadStatus},
};

pub use crate::shell::{
    Choice,
    LineReader,
    BufLineReader,
    Session,
    State,
};

#[cfg(test)]
mod unitests;
