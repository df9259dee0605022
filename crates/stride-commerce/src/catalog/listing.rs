//! Shoe listing model and card variant resolution.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::release::is_recent_release;
use crate::ids::ProductId;
use crate::money::Money;

/// Display mode for a listing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CardVariant {
    /// No badge, base price only.
    #[default]
    Default,
    /// "Sale" badge, struck-through base price plus sale price.
    OnSale,
    /// "Just Released!" badge.
    NewRelease,
}

impl CardVariant {
    /// CSS hook for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Default => "default",
            CardVariant::OnSale => "on-sale",
            CardVariant::NewRelease => "new-release",
        }
    }
}

/// A shoe listing as supplied by the catalog feed.
///
/// The record is immutable from the renderer's point of view; the card
/// variant is derived per render and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoeListing {
    /// Catalog identifier.
    pub id: ProductId,
    /// URL-friendly slug (unique), the card's link target.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Image location.
    #[serde(default)]
    pub image_src: String,
    /// Base price in cents.
    pub price: Money,
    /// Present when the listing is on sale.
    #[serde(default)]
    pub sale_price: Option<Money>,
    /// Used only for the recency check.
    pub release_date: NaiveDate,
    /// Number of colorways available.
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Create a new listing with no image, no sale price and no colorways.
    pub fn new(
        id: ProductId,
        slug: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            image_src: String::new(),
            price,
            sale_price: None,
            release_date,
            num_of_colors: 0,
        }
    }

    /// Set the image source.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image_src = src.into();
        self
    }

    /// Put the listing on sale.
    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Set the number of colorways.
    pub fn with_colors(mut self, num_of_colors: u32) -> Self {
        self.num_of_colors = num_of_colors;
        self
    }

    /// Check if the listing is currently on sale.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Resolve the display variant for this listing as of `today`.
    ///
    /// A listing can be both on sale and recently released; the sale badge
    /// is a merchandising override and wins that tie.
    pub fn card_variant(&self, today: NaiveDate) -> CardVariant {
        if self.sale_price.is_some() {
            CardVariant::OnSale
        } else if is_recent_release(self.release_date, today) {
            CardVariant::NewRelease
        } else {
            CardVariant::Default
        }
    }

    /// Resolve the display variant against the current UTC date.
    pub fn card_variant_today(&self) -> CardVariant {
        self.card_variant(Utc::now().date_naive())
    }

    /// Amount saved off the base price, when on sale in the same currency.
    pub fn sale_saving(&self) -> Option<Money> {
        let sale = self.sale_price.as_ref()?;
        self.price.try_subtract(sale).ok()
    }

    /// Link target for the card.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}
