use log::LevelFilter;
use contactbook::{
    Config,
    configuration
};

/**
# default_configuration::Builder
 - new
 - with_data_file
 - with_log_level
 - with_logger
 - load
 - build

# trait Config
 - data_file
 - log_level
 - log_file
 */
#[test]
fn test_build_cfg() {
    let cfg: Box<dyn Config>;

    cfg = configuration::Builder::new()
        .with_data_file("tests/contacts.txt")
        .with_log_level(LevelFilter::Info)
        .build()
        .map_err(|_| assert!(false))
        .unwrap();

    assert_eq!(cfg.data_file(), "tests/contacts.txt");
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file().is_none(), true);

    #[cfg(feature = "inspect")]
    cfg.dump();
}

#[test]
fn test_load_cfg() {
    let path = match std::fs::metadata("apitests.conf") {
        Ok(_) => "apitests.conf",
        Err(_) => "tests/apitests/apitests.conf",
    };

    let cfg = configuration::Builder::new()
        .load(path)
        .map_err(|e| panic!("{e}"))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cfg.data_file(), "apitests-contacts.txt");
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("apitests.log"));
}

#[test]
fn test_load_missing_cfg() {
    let mut builder = configuration::Builder::new();
    assert_eq!(builder.load("no-such-apitests.conf").is_err(), true);

    let cfg = builder.build().unwrap();
    assert_eq!(cfg.data_file(), "contacts.txt");
}
