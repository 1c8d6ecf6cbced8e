use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use crate::error::{Error, Result};
use crate::models::Wishlist;
use crate::reporter::Reporter;
use crate::scrapers::extract::{extract_book_record, BOOK_ITEMS, WISHLIST_ITEMS};
use crate::session::PageSource;

static PAGINATION_ENTRIES: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("ul.pagination:nth-child(2) > li").expect("Invalid pagination selector")
});

static NEXT_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#next-top > a").expect("Invalid next link selector"));

/// Walks a single wishlist's item listing page by page, appending every
/// extracted record to the wishlist in page order.
///
/// Loop continuation is decided by the presence of the next-page control;
/// the pagination entry count from the first page only caps the walk, since
/// it counts page entries plus the next arrow rather than pages.
pub struct WishlistPaginator<'a> {
    source: &'a dyn PageSource,
    base_url: &'a Url,
    wishlist_url: &'a Url,
    max_pages: usize,
}

impl<'a> WishlistPaginator<'a> {
    pub fn new(
        source: &'a dyn PageSource,
        base_url: &'a Url,
        wishlist_url: &'a Url,
        max_pages: usize,
    ) -> Self {
        Self {
            source,
            base_url,
            wishlist_url,
            max_pages,
        }
    }

    fn first_page_url(&self, wishlist: &Wishlist) -> Url {
        let mut url = self.wishlist_url.clone();
        url.query_pairs_mut().append_pair("wishlistId", &wishlist.id.0);
        url
    }

    /// Scrape every page of `wishlist`, appending records as they appear.
    /// `progress` is the caller's "n/total" label for status lines.
    pub async fn collect_into(
        &self,
        wishlist: &mut Wishlist,
        reporter: &dyn Reporter,
        progress: &str,
    ) -> Result<()> {
        let first_url = self.first_page_url(wishlist);
        let mut html = self.source.fetch(&first_url).await?;

        // A wishlist with a single page carries no pagination control at all.
        let page_bound = {
            let document = Html::parse_document(&html);
            let entries = document.select(&PAGINATION_ENTRIES).count();
            if entries == 0 {
                1
            } else {
                entries.min(self.max_pages)
            }
        };

        let mut page = 0usize;
        loop {
            page += 1;
            reporter.start(&format!(
                "Scraping {progress}: {} ({}) - page {page}",
                wishlist.name, wishlist.id
            ));

            // Parse synchronously and drop the document before the next
            // fetch; only the next href crosses the suspension point.
            let next_href = {
                let document = Html::parse_document(&html);
                if document.select(&WISHLIST_ITEMS).next().is_none() {
                    return Err(Error::MissingElement {
                        selector: ".wishlist-items",
                        context: "waiting for a wishlist page",
                    });
                }

                for item in document.select(&BOOK_ITEMS) {
                    match extract_book_record(item) {
                        Ok(book) => wishlist.books.push(book),
                        Err(e) => warn!(
                            "Skipping unreadable item on {} ({}) page {}: {}",
                            wishlist.name, wishlist.id, page, e
                        ),
                    }
                }

                if page >= page_bound {
                    None
                } else {
                    document
                        .select(&NEXT_LINK)
                        .next()
                        .and_then(|a| a.value().attr("href"))
                        .map(str::to_string)
                }
            };

            match next_href {
                Some(href) => {
                    let url = self.base_url.join(&href)?;
                    html = self.source.fetch(&url).await?;
                }
                None => break,
            }
        }

        Ok(())
    }
}
