use std::path::PathBuf;

use thiserror::Error;
#[derive(Error, Debug)]
pub enum Error {
    #[error("Std Io Error!")]
    StdIo(#[from] std::io::Error),
    #[error("Airline table {} contains no usable rows", .0.display())]
    EmptyAirlineTable(PathBuf),
}
