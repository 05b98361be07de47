use std::io::{self, IsTerminal};
use clap::Parser;
use log::LevelFilter;

mod prompt;
use prompt::EditorReader;

use contactbook::{
    configuration as cfg,
    logger,
    BufLineReader,
    Config,
    Session,
    Store,
};

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version = "0.1")]
#[command(about = "Interactive contact manager", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The contacts data file, overriding the configuration
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,

    /// Log debug records to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(opts: &Options) -> contactbook::core::Result<Box<dyn Config>> {
    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_deref() {
        if let Err(e) = builder.load(path) {
            eprintln!("Loading configuration {} error: {e}, using defaults", path);
        }
    }
    if let Some(file) = opts.file.as_deref() {
        builder.with_data_file(file);
    }
    if opts.verbose {
        builder.with_log_level(LevelFilter::Debug);
    }

    builder.build().or_else(|e| {
        eprintln!("Building configuration error: {e}, using defaults");
        cfg::Builder::new().build()
    })
}

fn main() {
    let opts = Options::parse();
    let cfg = match build_config(&opts) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating configuration error: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    logger::setup(cfg.log_level(), cfg.log_file());

    let store = Store::new(cfg.data_file());
    let result = if io::stdin().is_terminal() {
        Session::new(store, EditorReader::new(), io::stdout()).run()
    } else {
        let reader = BufLineReader::new(io::stdin().lock(), io::stdout());
        Session::new(store, reader, io::stdout()).run()
    };

    if let Err(e) = result {
        eprintln!("Contact manager stopped with error: {e}");
    }
    logger::teardown();
}
