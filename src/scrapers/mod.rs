mod extract;
mod index;
mod pagination;

pub use extract::extract_book_record;
pub use index::build_index;
pub use pagination::WishlistPaginator;

#[cfg(test)]
pub(crate) mod testutil {
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use url::Url;

    use crate::error::Result;
    use crate::session::PageSource;

    /// Canned page source keyed by full URL, with a fetch log so tests can
    /// assert how many navigations happened.
    pub(crate) struct StaticSource {
        pages: HashMap<String, String>,
        fetched: Mutex<Vec<String>>,
    }

    impl StaticSource {
        pub(crate) fn new<'a>(pages: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
            Self {
                pages: pages
                    .into_iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
                fetched: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn fetch_count(&self) -> usize {
            self.fetched.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PageSource for StaticSource {
        async fn fetch(&self, url: &Url) -> Result<String> {
            self.fetched.lock().unwrap().push(url.to_string());
            self.pages.get(url.as_str()).cloned().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("unexpected navigation to {url}"),
                )
                .into()
            })
        }
    }
}
