use crate::shell::menu::{self, Choice};

#[test]
fn test_parse_choice() {
    assert_eq!(Choice::parse("1"), Some(Choice::Add));
    assert_eq!(Choice::parse(" 2 "), Some(Choice::View));
    assert_eq!(Choice::parse("3\t"), Some(Choice::Save));
    assert_eq!(Choice::parse("4"), Some(Choice::Load));
    assert_eq!(Choice::parse("5"), Some(Choice::Exit));

    assert_eq!(Choice::parse(""), None);
    assert_eq!(Choice::parse("0"), None);
    assert_eq!(Choice::parse("6"), None);
    assert_eq!(Choice::parse("01"), None);
    assert_eq!(Choice::parse("1 2"), None);
    assert_eq!(Choice::parse("exit"), None);
}

#[test]
fn test_keys_round_trip() {
    for choice in Choice::ALL {
        assert_eq!(Choice::parse(choice.key()), Some(choice));
    }
}

#[test]
fn test_display_menu() {
    let mut out = Vec::new();
    menu::display_menu(&mut out).unwrap();
    let expected = "\n--- Contact Manager Menu ---\n\
        1. Add New Contact\n\
        2. View All Contacts\n\
        3. Save Contacts\n\
        4. Load Contacts\n\
        5. Exit\n\
        ----------------------------\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
