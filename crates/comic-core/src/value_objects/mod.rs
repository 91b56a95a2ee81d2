//! Value objects - domain primitives with their own invariants

mod price;
mod status;

pub use price::{Price, PriceParseError};
pub use status::ComicStatus;
