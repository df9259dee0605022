//! Theme constants and the listing stylesheet.

/// Brand palette.
pub mod colors {
    pub const WHITE: &str = "hsl(0deg 0% 100%)";
    pub const PRIMARY: &str = "hsl(340deg 65% 47%)";
    pub const SECONDARY: &str = "hsl(240deg 60% 63%)";
    pub const GRAY_500: &str = "hsl(210deg 8% 50%)";
    pub const GRAY_700: &str = "hsl(210deg 10% 40%)";
    pub const GRAY_900: &str = "hsl(210deg 12% 13%)";
}

/// Font weights.
pub mod weights {
    pub const NORMAL: u16 = 500;
    pub const MEDIUM: u16 = 600;
    pub const BOLD: u16 = 800;
}

/// Build the stylesheet for the listing page.
pub fn listing_styles() -> String {
    format!(
        r#"* {{ box-sizing: border-box; }}
body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; font-weight: {normal}; background: {white}; color: {gray900}; }}
.listing-container {{ max-width: 1200px; margin: 0 auto; padding: 2rem; }}

/* Grid */
.shoe-grid {{ display: flex; flex-wrap: wrap; gap: 32px; }}
.shoe-card-link {{ text-decoration: none; color: inherit; flex: 1 1 250px; }}

/* Card */
.shoe-image-wrapper {{ position: relative; margin-bottom: 12px; }}
.shoe-image {{ width: 100%; border-radius: 8px; }}
.shoe-flag {{ position: absolute; top: 12px; right: -4px; padding: 7px 9px 9px 11px; border-radius: 2px; color: {white}; font-weight: 700; font-size: 0.875rem; }}
.shoe-flag--sale {{ background: {primary}; }}
.shoe-flag--new {{ background: {secondary}; }}
.shoe-row {{ display: flex; justify-content: space-between; font-size: 1rem; }}
.shoe-name {{ font-weight: {medium}; color: {gray900}; margin: 0; }}
.shoe-price--crossed {{ color: {gray500}; text-decoration: line-through; }}
.shoe-colors {{ color: {gray700}; margin: 0; }}
.shoe-sale-price {{ font-weight: {medium}; color: {primary}; }}

/* Loading/empty states */
.shoe-grid.skeleton .shoe-card {{ flex: 1 1 250px; }}
.skeleton-image {{ aspect-ratio: 1; background: #eee; border-radius: 8px; }}
.skeleton-text {{ height: 1rem; background: #eee; border-radius: 4px; margin-top: 12px; }}
.skeleton-text.short {{ width: 50%; }}
.shoe-grid--empty .empty-state {{ margin: 4rem auto; text-align: center; color: {gray700}; }}
"#,
        normal = weights::NORMAL,
        medium = weights::MEDIUM,
        white = colors::WHITE,
        primary = colors::PRIMARY,
        secondary = colors::SECONDARY,
        gray500 = colors::GRAY_500,
        gray700 = colors::GRAY_700,
        gray900 = colors::GRAY_900,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_interpolate_palette() {
        let css = listing_styles();
        assert!(css.contains(".shoe-flag--sale { background: hsl(340deg 65% 47%); }"));
        assert!(css.contains("text-decoration: line-through"));
        assert!(!css.contains("{normal}"));
    }
}
