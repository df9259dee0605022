//! Shoe card section - one clickable listing card.

use chrono::NaiveDate;
use stride_commerce::catalog::{CardVariant, ShoeListing};
use stride_commerce::text::pluralize;

/// Render a single shoe card linking to `/shoe/{slug}`.
///
/// The variant decides the flag over the image and how prices render:
/// on sale, the base price is struck through and the sale price sits next
/// to the color count; otherwise the base price renders normally and no
/// second price is shown.
pub fn render_shoe_card(listing: &ShoeListing, today: NaiveDate) -> String {
    let variant = listing.card_variant(today);

    let price_class = match variant {
        CardVariant::OnSale => "shoe-price shoe-price--crossed",
        _ => "shoe-price",
    };

    let sale_price = match (variant, &listing.sale_price) {
        (CardVariant::OnSale, Some(sale)) => {
            format!(r#"<span class="shoe-sale-price">{}</span>"#, sale.display())
        }
        _ => String::new(),
    };

    format!(
        r#"<a href="{href}" class="shoe-card-link">
    <article class="shoe-card" data-product-id="{id}" data-variant="{variant}">
        <div class="shoe-image-wrapper">
            {flag}<img class="shoe-image" alt="" src="{src}">
        </div>
        <div class="shoe-row">
            <h3 class="shoe-name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="shoe-row">
            <p class="shoe-colors">{colors}</p>
            {sale_price}
        </div>
    </article>
</a>"#,
        href = html_escape(&listing.href()),
        id = html_escape(listing.id.as_str()),
        variant = variant.as_str(),
        flag = render_flag(variant),
        src = html_escape(&listing.image_src),
        name = html_escape(&listing.name),
        price_class = price_class,
        price = listing.price.display(),
        colors = pluralize("Color", listing.num_of_colors),
        sale_price = sale_price
    )
}

fn render_flag(variant: CardVariant) -> String {
    match variant {
        CardVariant::OnSale => r#"<div class="shoe-flag shoe-flag--sale">Sale</div>"#.to_string(),
        CardVariant::NewRelease => {
            r#"<div class="shoe-flag shoe-flag--new">Just Released!</div>"#.to_string()
        }
        CardVariant::Default => String::new(),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
