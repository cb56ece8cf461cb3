//! Search results page parsing.
//!
//! Each store profile names the CSS selectors of a result card and of the
//! name, price and link inside it. Cards that cannot be turned into a valid
//! listing are skipped; one bad card never discards the rest of the page.

use super::price::extract_price;
use super::schema::{Availability, Listing};
use crate::collectors::profile::{LinkStyle, StoreProfile};
use crate::utils::config::DEFAULT_CURRENCY;
use crate::utils::error::CollectError;
use log::debug;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

/// Listings parsed from one page, plus how many cards were dropped
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub listings: Vec<Listing>,
    pub skipped: usize,
}

/// Parse up to `limit` result cards from a search page
///
/// **Public** - main entry point for HTML parsing
///
/// # Errors
/// * `CollectError::InvalidSelector` - a selector in the profile does not parse
pub fn parse_listings(
    html: &str,
    profile: &StoreProfile,
    limit: usize,
) -> Result<ParseOutcome, CollectError> {
    let card = parse_selector(profile.card_selector)?;
    let name = parse_selector(profile.name_selector)?;
    let price = parse_selector(profile.price_selector)?;
    let link = parse_selector(profile.link_selector)?;

    let document = Html::parse_document(html);
    let mut outcome = ParseOutcome::default();

    for item in document.select(&card).take(limit) {
        let name_text = item.select(&name).next().map(element_text);
        let price_text = item.select(&price).next().map(element_text);

        let (Some(name_text), Some(price_text)) = (name_text, price_text) else {
            debug!("{}: skipping card without name or price", profile.name);
            outcome.skipped += 1;
            continue;
        };

        let url = item
            .select(&link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| resolve_link(profile, href))
            .unwrap_or_default();

        let listing = extract_price(&price_text).and_then(|value| {
            Listing::new(
                name_text,
                value,
                DEFAULT_CURRENCY,
                profile.name,
                Availability::CheckStore,
                url,
            )
        });

        match listing {
            Ok(listing) => outcome.listings.push(listing),
            Err(e) => {
                debug!("{}: skipping card: {}", profile.name, e);
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}

fn parse_selector(selector: &str) -> Result<Selector, CollectError> {
    Selector::parse(selector).map_err(|_| CollectError::InvalidSelector(selector.to_string()))
}

/// Text content with each fragment trimmed, joined by single spaces
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn resolve_link(profile: &StoreProfile, href: &str) -> String {
    let href = href.trim();
    match profile.link_style {
        LinkStyle::Absolute => href.to_string(),
        LinkStyle::Relative => Url::parse(&profile.base_url)
            .and_then(|base| base.join(href))
            .map(String::from)
            .unwrap_or_else(|e| {
                debug!("{}: cannot resolve link '{}': {}", profile.name, href, e);
                href.to_string()
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::profile::StoreProfile;

    const JUMIA_PAGE: &str = r#"
        <html><body>
          <article class="prd">
            <a class="core" href="/casque-bluetooth-123.html">
              <h3 class="name"> Casque Bluetooth </h3>
              <div class="prc">249.00 Dhs</div>
            </a>
          </article>
          <article class="prd">
            <a class="core" href="/casque-pro-456.html">
              <h3 class="name">Casque Pro</h3>
              <div class="prc">1,099.00 Dhs</div>
            </a>
          </article>
        </body></html>
    "#;

    #[test]
    fn test_parse_jumia_cards() {
        let outcome = parse_listings(JUMIA_PAGE, &StoreProfile::jumia(), 10).unwrap();

        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.listings.len(), 2);
        assert_eq!(outcome.listings[0].name(), "Casque Bluetooth");
        assert_eq!(outcome.listings[0].price(), 249.0);
        assert_eq!(outcome.listings[0].store(), "Jumia");
        assert_eq!(
            outcome.listings[0].url(),
            "https://www.jumia.ma/casque-bluetooth-123.html"
        );
        assert_eq!(outcome.listings[1].price(), 1099.0);
    }

    #[test]
    fn test_parse_respects_limit() {
        let outcome = parse_listings(JUMIA_PAGE, &StoreProfile::jumia(), 1).unwrap();
        assert_eq!(outcome.listings.len(), 1);
    }

    #[test]
    fn test_parse_skips_broken_cards() {
        let page = r#"
            <div class="product-item">
              <div class="product-name">Bouilloire</div>
              <span class="price">Rupture</span>
            </div>
            <div class="product-item">
              <span class="price">99 DH</span>
            </div>
            <div class="product-item">
              <a href="https://www.marjane.ma/p/grille-pain">
                <div class="product-name">Grille-pain</div>
              </a>
              <span class="price">319.00 DH</span>
            </div>
        "#;

        let outcome = parse_listings(page, &StoreProfile::marjane(), 10).unwrap();

        assert_eq!(outcome.skipped, 2);
        assert_eq!(outcome.listings.len(), 1);
        assert_eq!(outcome.listings[0].name(), "Grille-pain");
        assert_eq!(outcome.listings[0].url(), "https://www.marjane.ma/p/grille-pain");
    }

    #[test]
    fn test_relative_link_keeps_absolute_href() {
        let profile = StoreProfile::jumia();
        assert_eq!(
            resolve_link(&profile, "https://cdn.jumia.ma/x.html"),
            "https://cdn.jumia.ma/x.html"
        );
        assert_eq!(resolve_link(&profile, "x.html"), "https://www.jumia.ma/x.html");
    }

    #[test]
    fn test_relative_link_protocol_relative_href() {
        let profile = StoreProfile::jumia();
        assert_eq!(
            resolve_link(&profile, "//www.jumia.ma/p-1.html"),
            "https://www.jumia.ma/p-1.html"
        );
    }

    #[test]
    fn test_relative_link_normalizes_parent_segments() {
        let profile = StoreProfile::jumia().with_base_url("https://www.jumia.ma/catalog/phones/");
        assert_eq!(
            resolve_link(&profile, "../casque-1.html"),
            "https://www.jumia.ma/catalog/casque-1.html"
        );
    }

    #[test]
    fn test_parse_card_with_protocol_relative_link() {
        let page = r#"
            <article class="prd">
              <a class="core" href="//www.jumia.ma/p-1.html">
                <h3 class="name">Chargeur</h3>
                <div class="prc">99 Dhs</div>
              </a>
            </article>
        "#;

        let outcome = parse_listings(page, &StoreProfile::jumia(), 10).unwrap();
        assert_eq!(outcome.listings[0].url(), "https://www.jumia.ma/p-1.html");
    }

    #[test]
    fn test_invalid_selector() {
        let mut profile = StoreProfile::jumia();
        profile.card_selector = "article[";
        assert!(matches!(
            parse_listings("<html></html>", &profile, 10),
            Err(CollectError::InvalidSelector(_))
        ));
    }
}
