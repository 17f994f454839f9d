//! Building links to other pages of the current listing.

use url::form_urlencoded;

use super::query::DEFAULT_PAGE_PARAM;
use super::window::PageToken;

/// Builds URLs that point at a different page of the current path.
///
/// Existing query parameters are kept in order; only the page parameter is
/// rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrlBuilder {
    path: String,
    params: Vec<(String, String)>,
    page_param: String,
}

impl PageUrlBuilder {
    /// Create a builder from a path and its raw query string (no leading `?`).
    #[must_use]
    pub fn new(path: &str, query: Option<&str>) -> Self {
        let params = query
            .map(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Self {
            path: path.to_string(),
            params,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
        }
    }

    /// Use a different query parameter for the page number.
    #[must_use]
    pub fn with_page_param(mut self, name: &str) -> Self {
        self.page_param = name.to_string();
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn page_param(&self) -> &str {
        &self.page_param
    }

    /// URL for `page`.
    ///
    /// The first existing page parameter is replaced in place and any repeats
    /// are dropped. If there was none it is appended last.
    #[must_use]
    pub fn page_url(&self, page: i64) -> String {
        let value = page.to_string();
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut written = false;

        for (key, val) in &self.params {
            if *key == self.page_param {
                if !written {
                    serializer.append_pair(key, &value);
                    written = true;
                }
            } else {
                serializer.append_pair(key, val);
            }
        }
        if !written {
            serializer.append_pair(&self.page_param, &value);
        }

        format!("{}?{}", self.path, serializer.finish())
    }

    /// URL for a token. The ellipsis has none.
    #[must_use]
    pub fn href_for(&self, token: PageToken) -> Option<String> {
        token.page().map(|page| self.page_url(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_existing_query() {
        let builder = PageUrlBuilder::new("/invoices", None);
        assert_eq!(builder.page_url(3), "/invoices?page=3");
    }

    #[test]
    fn test_appends_after_other_params() {
        let builder = PageUrlBuilder::new("/invoices", Some("query=lee&sort=desc"));
        assert_eq!(builder.page_url(2), "/invoices?query=lee&sort=desc&page=2");
    }

    #[test]
    fn test_replaces_in_place() {
        let builder = PageUrlBuilder::new("/invoices", Some("page=1&query=lee"));
        assert_eq!(builder.page_url(5), "/invoices?page=5&query=lee");
    }

    #[test]
    fn test_drops_duplicate_page_params() {
        let builder = PageUrlBuilder::new("/", Some("page=1&q=a&page=7"));
        assert_eq!(builder.page_url(4), "/?page=4&q=a");
    }

    #[test]
    fn test_encodes_values() {
        let builder = PageUrlBuilder::new("/search", Some("q=hello%20world&tag=a%26b"));
        assert_eq!(builder.page_url(2), "/search?q=hello+world&tag=a%26b&page=2");
    }

    #[test]
    fn test_custom_page_param() {
        let builder = PageUrlBuilder::new("/", Some("page=9")).with_page_param("p");
        assert_eq!(builder.page_param(), "p");
        assert_eq!(builder.page_url(2), "/?page=9&p=2");
    }

    #[test]
    fn test_href_for_tokens() {
        let builder = PageUrlBuilder::new("/list", None);
        assert_eq!(
            builder.href_for(PageToken::Page(6)),
            Some("/list?page=6".to_string())
        );
        assert_eq!(builder.href_for(PageToken::Ellipsis), None);
    }

    #[test]
    fn test_out_of_range_pages_still_build() {
        let builder = PageUrlBuilder::new("/list", None);
        assert_eq!(builder.page_url(0), "/list?page=0");
        assert_eq!(builder.page_url(-1), "/list?page=-1");
    }
}
