#[cfg(test)] mod test_menu;
