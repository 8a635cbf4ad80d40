pub mod classify;
pub mod header;
pub mod signals;

pub use classify::{classify, classify_value, ParseError};
pub use header::{HeaderLookup, LookupError, StaticHeaders};
pub use signals::parse_signals;
