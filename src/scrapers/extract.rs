use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::error::{Error, Result};
use crate::models::BookRecord;
use crate::parsers::{clean_text, strip_author_prefix};

pub(crate) static WISHLIST_ITEMS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".wishlist-items").expect("Invalid items container selector"));

pub(crate) static BOOK_ITEMS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".wishlist-items .book-list-item .item-info-wrap")
        .expect("Invalid book item selector")
});

static ITEM_INFO: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".item-info").expect("Invalid item info selector"));

static ITEM_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".item-title").expect("Invalid item title selector"));

static ITEM_AUTHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".author").expect("Invalid author selector"));

/// Site-specific traversal for a single wishlist item. All layout coupling
/// for item extraction lives here; each missing piece of structure fails
/// with the selector that was expected.
pub fn extract_book_record(item: ElementRef<'_>) -> Result<BookRecord> {
    let info = item.select(&ITEM_INFO).next().ok_or(Error::MissingElement {
        selector: ".item-info",
        context: "reading a wishlist item",
    })?;

    let title = info
        .select(&ITEM_TITLE)
        .next()
        .ok_or(Error::MissingElement {
            selector: ".item-title",
            context: "reading a wishlist item",
        })?;

    let author = info
        .select(&ITEM_AUTHOR)
        .next()
        .ok_or(Error::MissingElement {
            selector: ".author",
            context: "reading a wishlist item",
        })?;

    let author_text = clean_text(&author.text().collect::<String>());

    Ok(BookRecord {
        title: clean_text(&title.text().collect::<String>()),
        author: strip_author_prefix(&author_text).to_string(),
    })
}
