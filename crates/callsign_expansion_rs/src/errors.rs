use thiserror::Error;
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown char '{character}' in input string '{input}'")]
    UnknownCharacter { character: char, input: String },
    #[error("Aviation Helper: {0}")]
    AviationHelper(#[from] aviation_helper_rs::errors::Error),
    #[error("Std Io Error!")]
    StdIo(#[from] std::io::Error),
    #[error("Ron deserialization failed: {0}")]
    RonDeserialize(#[from] ron::error::SpannedError),
}
