use std::fs;
use log::{info, debug, error};
use serial_test::serial;
use crate::core::logger;
use super::{working_path, remove_working_path};

#[test]
#[serial]
fn test_logger() {
    logger::setup(log::LevelFilter::Info, None);
    info!("info: testing....");
    error!("error: testing...");
    assert_eq!(log::max_level(), log::LevelFilter::Info);
    logger::teardown();
    assert_eq!(log::max_level(), log::LevelFilter::Off);
}

#[test]
#[serial]
fn test_logger_file() {
    let path = working_path("test-logger-file");
    let file = format!("{}/contacts.log", path);

    logger::setup(log::LevelFilter::Info, Some(&file));
    logger::revert_console_output();
    info!("info: written to file");
    debug!("debug: filtered out");
    logger::teardown();

    let data = fs::read_to_string(&file).unwrap();
    assert_eq!(data.contains("[INFO] info: written to file"), true);
    assert_eq!(data.contains("filtered out"), false);

    remove_working_path(&path);
}

#[test]
#[serial]
fn test_logger_bad_file() {
    logger::setup(log::LevelFilter::Debug, Some("no-such-dir/nested/contacts.log"));
    debug!("debug: console only");
    assert_eq!(log::max_level(), log::LevelFilter::Debug);
    logger::teardown();
}
