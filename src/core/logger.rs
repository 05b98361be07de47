use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use log::{
    LevelFilter,
    Metadata,
    Record
};

struct Sink {
    level   : LevelFilter,
    console : bool,
    file    : Option<File>,
}

struct BookLogger {
    sink: Mutex<Sink>,
}

static BOOK_LOGGER: BookLogger = BookLogger {
    sink: Mutex::new(Sink {
        level   : LevelFilter::Off,
        console : false,
        file    : None,
    }),
};

impl log::Log for BookLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.sink.lock() {
            Ok(sink) => metadata.level() <= sink.level,
            Err(_) => false,
        }
    }

    fn log(&self, record: &Record) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if record.level() > sink.level {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        // stdout belongs to the menu.
        if sink.console {
            eprintln!("{}", line);
        }
        if let Some(fp) = sink.file.as_mut() {
            _ = writeln!(fp, "{}", line);
        }
    }

    fn flush(&self) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if let Some(fp) = sink.file.as_mut() {
            _ = fp.flush();
        }
        _ = io::stderr().flush();
    }
}

/// Installs the crate logger. Records at or below `level` go to stderr and,
/// when `file` is given, are appended to that file as well. Calling it again
/// replaces the previous settings.
pub fn setup(level: LevelFilter, file: Option<&str>) {
    let fp = file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Opening log file {} error: {}", path, e))
            .ok()
    });

    if let Ok(mut sink) = BOOK_LOGGER.sink.lock() {
        sink.level = level;
        sink.console = true;
        sink.file = fp;
    }

    _ = log::set_logger(&BOOK_LOGGER);
    log::set_max_level(level);
}

/// Stops echoing records to the console; file output is kept.
pub fn revert_console_output() {
    if let Ok(mut sink) = BOOK_LOGGER.sink.lock() {
        sink.console = false;
    }
}

pub fn teardown() {
    log::logger().flush();
    if let Ok(mut sink) = BOOK_LOGGER.sink.lock() {
        sink.level = LevelFilter::Off;
        sink.console = false;
        sink.file = None;
    }
    log::set_max_level(LevelFilter::Off);
}
