use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write image: {0}")]
    Image(#[from] ::image::ImageError),

    #[error("{0}")]
    Options(#[from] getopts::Fail),

    #[error("invalid value {value:?} for --{name}")]
    InvalidValue { name: &'static str, value: String },

    #[error("unknown scene {0:?} (available: {1})")]
    UnknownScene(String, String),

    #[error("unsupported output format {0:?}, expected .png or .exr")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
