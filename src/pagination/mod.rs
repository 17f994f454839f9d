//! Page window calculation and the query-string plumbing around it.
//!
//! - `window`: which page numbers and ellipses a control shows
//! - `query`: reading (and bounding) the current page from a query string
//! - `links`: building links to other pages of the current path

pub mod links;
pub mod query;
pub mod window;

pub use links::PageUrlBuilder;
pub use query::{
    clamp_page, current_page_from_query, parse_page, query_param, DEFAULT_PAGE_PARAM,
};
pub use window::{generate_fixed_pagination, PageToken, ELLIPSIS};
