//! # Query Layer
//!
//! Translates each API operation into one bounded read against the
//! climate store and shapes the rows into response values.

mod climate;
pub mod cutoff;
pub mod errors;

pub use climate::{ClimateQueries, PrecipitationByDate, WELCOME_TEXT};
pub use errors::{QueryError, QueryResult};
