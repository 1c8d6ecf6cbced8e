use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{Error, Result};
use crate::models::{ResultSet, Wishlist};
use crate::parsers::{clean_text, wishlist_id_from_href};
use crate::session::PageSource;

static SIDEBAR_LINKS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("ul.wishlist-links.sidebar-nav li a").expect("Invalid sidebar link selector")
});

/// Build the wishlist index from the overview page's sidebar: one entry per
/// link, in document order, with empty book lists. A link whose target does
/// not carry the id pattern aborts the run; zero links is an empty (but
/// valid) index the caller should surface in reporting.
pub async fn build_index(source: &dyn PageSource, overview_url: &Url) -> Result<ResultSet> {
    let html = source.fetch(overview_url).await?;
    let document = Html::parse_document(&html);

    let mut results = ResultSet::new();
    for link in document.select(&SIDEBAR_LINKS) {
        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| Error::WishlistIdPattern("<link without href>".to_string()))?;
        let id = wishlist_id_from_href(href)?;

        // The display name is the text of the link's first child element.
        let name_element = link
            .children()
            .filter_map(ElementRef::wrap)
            .next()
            .ok_or(Error::MissingElement {
                selector: "ul.wishlist-links.sidebar-nav li a > *",
                context: "reading a wishlist name",
            })?;
        let name = clean_text(&name_element.text().collect::<String>());

        results.push(Wishlist::new(id, name));
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WishlistId;
    use crate::scrapers::testutil::StaticSource;
    use pretty_assertions::assert_eq;

    const SIDEBAR: &str = r#"
        <ul class="wishlist-links sidebar-nav">
          <li><a href="/account/wishlist?wishlistId=12345"><span>Fiction</span></a></li>
          <li><a href="/account/wishlist?wishlistId=67890"><span>Non-fiction</span></a></li>
        </ul>"#;

    #[tokio::test]
    async fn builds_index_in_discovery_order() {
        let overview = Url::parse("https://example.test/account/wishlist").unwrap();
        let source = StaticSource::new([(overview.as_str(), SIDEBAR)]);

        let results = build_index(&source, &overview).await.unwrap();

        let entries: Vec<(&str, &str)> = results
            .iter()
            .map(|w| (w.id.0.as_str(), w.name.as_str()))
            .collect();
        assert_eq!(entries, vec![("12345", "Fiction"), ("67890", "Non-fiction")]);
        assert!(results
            .get(&WishlistId("12345".to_string()))
            .unwrap()
            .books
            .is_empty());
    }

    #[tokio::test]
    async fn empty_sidebar_yields_empty_index() {
        let overview = Url::parse("https://example.test/account/wishlist").unwrap();
        let source = StaticSource::new([(
            overview.as_str(),
            r#"<ul class="wishlist-links sidebar-nav"></ul>"#,
        )]);

        let results = build_index(&source, &overview).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn link_without_id_pattern_aborts() {
        let overview = Url::parse("https://example.test/account/wishlist").unwrap();
        let source = StaticSource::new([(
            overview.as_str(),
            r#"<ul class="wishlist-links sidebar-nav">
                 <li><a href="/account/settings"><span>Settings</span></a></li>
               </ul>"#,
        )]);

        let err = build_index(&source, &overview).await.unwrap_err();
        assert!(matches!(err, Error::WishlistIdPattern(_)));
    }
}
