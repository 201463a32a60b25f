//! Static aviation lookup data used to verbalize callsigns: the ICAO spelling
//! alphabet, national registration prefixes and the airline call-word table.

pub mod airlines;
pub mod errors;
pub mod symbols;

pub use airlines::{AirlineEntry, AirlineTable};
pub use errors::Error;
