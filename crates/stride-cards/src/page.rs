//! Full listing page assembly.

use chrono::NaiveDate;
use stride_commerce::catalog::ShoeListing;
use tracing::debug;

use crate::sections::render_card_grid;
use crate::theme::listing_styles;

/// Render a complete listing page document with embedded styles.
pub fn render_listing_page(title: &str, listings: &[ShoeListing], today: NaiveDate) -> String {
    debug!(title, listings = listings.len(), "rendering listing page");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
    <main class="listing-container">
        {grid}
    </main>
</body>
</html>"#,
        title = html_escape(title),
        styles = listing_styles(),
        grid = render_card_grid(listings, today)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
