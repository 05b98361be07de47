use log::LevelFilter;

pub trait Config {
    /// Path of the flat contacts file.
    fn data_file(&self) -> &str;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
