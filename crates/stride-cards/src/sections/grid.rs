//! Shoe grid section - flexible grid of listing cards.

use chrono::NaiveDate;
use stride_commerce::catalog::ShoeListing;
use tracing::debug;

use super::render_shoe_card;

/// Render the shoe grid section.
pub fn render_card_grid(listings: &[ShoeListing], today: NaiveDate) -> String {
    debug!(listings = listings.len(), "rendering shoe grid");

    if listings.is_empty() {
        return render_grid_empty();
    }

    let cards: String = listings
        .iter()
        .map(|listing| render_shoe_card(listing, today))
        .collect();

    format!(
        r#"<section class="shoe-grid" data-section="grid">
    {}
</section>"#,
        cards
    )
}

/// Render skeleton placeholder cards while listings load.
pub fn render_grid_skeleton() -> String {
    let cards: String = (0..6)
        .map(|_| {
            r#"<div class="shoe-card skeleton">
        <div class="skeleton-image"></div>
        <div class="skeleton-text"></div>
        <div class="skeleton-text short"></div>
    </div>"#
        })
        .collect();

    format!(
        r#"<section class="shoe-grid skeleton" data-section="grid">
    {}
</section>"#,
        cards
    )
}

/// Render the empty state when the feed has no listings.
pub fn render_grid_empty() -> String {
    r#"<section class="shoe-grid shoe-grid--empty" data-section="grid">
    <div class="empty-state">
        <h2>No shoes found</h2>
        <p>Check back soon for new arrivals.</p>
    </div>
</section>"#
        .to_string()
}
