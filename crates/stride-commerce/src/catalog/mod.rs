//! Shoe catalog: listings, card variants, release recency.

mod listing;
mod release;

pub use listing::{CardVariant, ShoeListing};
pub use release::{is_recent_release, parse_release_date, RECENCY_WINDOW_MONTHS};
