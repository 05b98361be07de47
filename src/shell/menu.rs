use std::io::{self, Write};

pub const MENU_HEADER: &str = "--- Contact Manager Menu ---";
pub const MENU_FOOTER: &str = "----------------------------";
pub const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Add,
    View,
    Save,
    Load,
    Exit,
}

impl Choice {
    pub const ALL: [Choice; 5] = [
        Choice::Add,
        Choice::View,
        Choice::Save,
        Choice::Load,
        Choice::Exit,
    ];

    /// Matches the trimmed input against the literal keys `1` to `5`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::View),
            "3" => Some(Choice::Save),
            "4" => Some(Choice::Load),
            "5" => Some(Choice::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Choice::Add     => "1",
            Choice::View    => "2",
            Choice::Save    => "3",
            Choice::Load    => "4",
            Choice::Exit    => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Choice::Add     => "Add New Contact",
            Choice::View    => "View All Contacts",
            Choice::Save    => "Save Contacts",
            Choice::Load    => "Load Contacts",
            Choice::Exit    => "Exit",
        }
    }
}

pub fn display_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", MENU_HEADER)?;
    for choice in Choice::ALL.iter() {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    writeln!(out, "{}", MENU_FOOTER)
}
