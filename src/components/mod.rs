//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout
//! - `icons`: Inline SVG icons
//! - `pagination`: Page navigation controls
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup, Render};
//! use crate::components::{BaseLayout, Pagination};
//! use crate::pagination::PageUrlBuilder;
//!
//! fn my_page() -> Markup {
//!     let urls = PageUrlBuilder::new("/invoices", None);
//!     let content = html! {
//!         h1 { "Invoices" }
//!         (Pagination::new(1, 12, urls))
//!     };
//!     BaseLayout::new("Invoices").render(content)
//! }
//! ```

pub mod icons;
pub mod layout;
pub mod pagination;

pub use layout::BaseLayout;

pub use pagination::{
    ArrowDirection, DefaultRenderer, Pagination, PaginationRenderer, DEFAULT_MAX_VISIBLE_BUTTONS,
};

/// Re-export maud for convenience
pub use maud::{html, Markup, Render, DOCTYPE};
