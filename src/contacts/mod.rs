pub mod contact;
pub mod contact_list;
pub mod store;

pub use contact::Contact;
pub use contact_list::ContactList;
pub use store::{
    Store,
    Loaded,
    LoadStatus,
};
