//! Shoe catalog domain types and display logic for Stride.
//!
//! This crate provides the types behind the storefront listing pages:
//!
//! - **Catalog**: shoe listings, card variants, release recency
//! - **Money**: cents-based prices with currency-aware formatting
//! - **Text**: small display helpers (pluralized labels)
//!
//! # Example
//!
//! ```rust
//! use stride_commerce::prelude::*;
//! use chrono::NaiveDate;
//!
//! let listing = ShoeListing::new(
//!     ProductId::new("shoe-001"),
//!     "court-classic",
//!     "Court Classic",
//!     Money::new(10000, Currency::USD),
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//! )
//! .with_sale_price(Money::new(8000, Currency::USD));
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! assert_eq!(listing.card_variant(today), CardVariant::OnSale);
//! assert_eq!(listing.price.display(), "$100.00");
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod text;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    pub use crate::catalog::{
        is_recent_release, parse_release_date, CardVariant, ShoeListing,
    };

    pub use crate::text::pluralize;
}
