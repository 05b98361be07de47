pub mod menu;
pub mod reader;
pub mod session;

pub use menu::Choice;
pub use reader::{
    LineReader,
    BufLineReader,
};
pub use session::{
    Session,
    State,
};

#[cfg(test)]
mod unitests;
