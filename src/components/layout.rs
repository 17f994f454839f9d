//! Base layout components for the web UI.
//!
//! This module provides the HTML skeleton wrapping every page: head
//! metadata, the utility stylesheet, a header, and a footer.

use maud::{html, Markup, DOCTYPE};

/// Tailwind build served from a CDN. The pagination markup uses its
/// utility classes.
const TAILWIND_SCRIPT_SRC: &str = "https://cdn.tailwindcss.com";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    description: Option<&'a str>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
        }
    }

    /// Set the meta description.
    #[must_use]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main>` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    @if let Some(description) = self.description {
                        meta name="description" content=(description);
                    }
                    title { (self.title) " - Fixed Pagination" }
                    script src=(TAILWIND_SCRIPT_SRC) {}
                }
                body class="bg-white text-gray-900" {
                    (Self::render_header())
                    main class="mx-auto max-w-3xl p-6" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    fn render_header() -> Markup {
        html! {
            header class="mx-auto max-w-3xl px-6 pt-6" {
                nav {
                    a href="/" class="font-semibold" { "Fixed Pagination" }
                }
            }
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="mx-auto max-w-3xl px-6 pb-6 text-sm text-gray-500" {
                small {
                    a href="/api/pagination" { "JSON" }
                    " | "
                    a href="/healthz" { "Health" }
                }
            }
        }
    }
}
