//! End-to-end page rendering over a mixed feed.

use chrono::NaiveDate;
use stride_cards::render_listing_page;
use stride_commerce::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn feed() -> Vec<ShoeListing> {
    vec![
        ShoeListing::new(
            ProductId::new("shoe-001"),
            "court-classic",
            "Court Classic",
            Money::new(10000, Currency::USD),
            parse_release_date("2023-10-01").unwrap(),
        )
        .with_image("/images/court-classic.jpg")
        .with_colors(3)
        .with_sale_price(Money::new(8000, Currency::USD)),
        ShoeListing::new(
            ProductId::new("shoe-002"),
            "trail-runner",
            "Trail Runner",
            Money::new(5000, Currency::USD),
            parse_release_date("2024-05-26").unwrap(),
        )
        .with_image("/images/trail-runner.jpg")
        .with_colors(1),
        ShoeListing::new(
            ProductId::new("shoe-003"),
            "daily-canvas",
            "Daily Canvas",
            Money::new(5000, Currency::USD),
            parse_release_date("2022-06-15").unwrap(),
        )
        .with_image("/images/daily-canvas.jpg"),
    ]
}

#[test]
fn renders_complete_document() {
    let html = render_listing_page("All Shoes", &feed(), date(2024, 6, 15));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>All Shoes</title>"));
    assert!(html.contains("<style>"));
    assert!(html.contains(r#"<main class="listing-container">"#));
}

#[test]
fn renders_each_variant_in_the_feed() {
    let html = render_listing_page("All Shoes", &feed(), date(2024, 6, 15));

    // On sale: struck base price plus highlighted sale price.
    assert!(html.contains(">Sale</div>"));
    assert!(html.contains(r#"<span class="shoe-price shoe-price--crossed">$100.00</span>"#));
    assert!(html.contains(r#"<span class="shoe-sale-price">$80.00</span>"#));

    // New release: badge, normal price.
    assert!(html.contains(">Just Released!</div>"));
    assert!(html.contains("1 Color<"));

    // Default: present with no badge of its own.
    assert!(html.contains(r#"data-product-id="shoe-003""#));
    assert!(html.contains(r#"data-variant="default""#));
    assert_eq!(html.matches(">Sale</div>").count(), 1);
    assert_eq!(html.matches(">Just Released!</div>").count(), 1);
}

#[test]
fn sale_and_recent_release_prefers_sale() {
    let mut listings = feed();
    listings[0].release_date = date(2024, 6, 10);
    let html = render_listing_page("All Shoes", &listings, date(2024, 6, 15));

    assert_eq!(html.matches(">Sale</div>").count(), 1);
    assert_eq!(html.matches(">Just Released!</div>").count(), 1);
}

#[test]
fn empty_feed_renders_empty_state() {
    let html = render_listing_page("All Shoes", &[], date(2024, 6, 15));
    assert!(html.contains("No shoes found"));
    assert!(!html.contains("shoe-card-link"));
}
