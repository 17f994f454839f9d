//! Pagination component for navigating through multi-page content.
//!
//! Renders a previous arrow, a fixed-width run of page links and ellipses
//! computed by [`generate_fixed_pagination`], and a next arrow. How each
//! piece looks is delegated to a [`PaginationRenderer`], so the same control
//! can be restyled without touching the windowing or link logic.

use maud::{html, Markup, Render};

use super::icons;
use crate::pagination::{generate_fixed_pagination, PageToken, PageUrlBuilder, ELLIPSIS};

/// Button budget used when none is configured.
pub const DEFAULT_MAX_VISIBLE_BUTTONS: i64 = 5;

/// Which way a navigation arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Previous page.
    Left,
    /// Next page.
    Right,
}

impl ArrowDirection {
    /// Spacing class separating the arrow from the page links.
    #[must_use]
    pub const fn spacing_class(self) -> &'static str {
        match self {
            Self::Left => "mr-2 md:mr-4",
            Self::Right => "ml-2 md:ml-4",
        }
    }

    #[must_use]
    pub fn icon(self) -> Markup {
        match self {
            Self::Left => icons::arrow_left("w-4"),
            Self::Right => icons::arrow_right("w-4"),
        }
    }
}

/// The pieces a pagination control is made of.
///
/// Implement this to render the control with a different markup structure or
/// CSS framework.
pub trait PaginationRenderer {
    /// The page currently being viewed. Still a link.
    fn render_active_page(&self, page: i64, href: &str) -> Markup;

    fn render_inactive_page(&self, page: i64, href: &str) -> Markup;

    /// Placeholder for omitted pages. Must not be navigable.
    fn render_ellipsis(&self) -> Markup;

    /// Arrow at the first/last page. Must not be navigable.
    fn render_disabled_arrow(&self, direction: ArrowDirection) -> Markup;

    fn render_enabled_arrow(&self, direction: ArrowDirection, href: &str) -> Markup;
}

/// Square bordered buttons styled with Tailwind utility classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl DefaultRenderer {
    const NUMBER_BASE: &'static str = "flex h-10 w-10 items-center justify-center text-sm border";
    const ARROW_BASE: &'static str = "flex h-10 w-10 items-center justify-center rounded-md border";

    fn number_class(active: bool) -> String {
        if active {
            format!("{} z-10 bg-blue-600 border-blue-600 text-white", Self::NUMBER_BASE)
        } else {
            format!("{} hover:bg-gray-100", Self::NUMBER_BASE)
        }
    }

    fn arrow_class(direction: ArrowDirection, disabled: bool) -> String {
        let state = if disabled {
            "pointer-events-none text-gray-300"
        } else {
            "hover:bg-gray-100"
        };
        format!("{} {} {}", Self::ARROW_BASE, state, direction.spacing_class())
    }
}

impl PaginationRenderer for DefaultRenderer {
    fn render_active_page(&self, page: i64, href: &str) -> Markup {
        html! {
            a href=(href) class=(Self::number_class(true)) { (page) }
        }
    }

    fn render_inactive_page(&self, page: i64, href: &str) -> Markup {
        html! {
            a href=(href) class=(Self::number_class(false)) { (page) }
        }
    }

    fn render_ellipsis(&self) -> Markup {
        html! {
            div class={ (Self::NUMBER_BASE) " rounded-md" } { (ELLIPSIS) }
        }
    }

    fn render_disabled_arrow(&self, direction: ArrowDirection) -> Markup {
        html! {
            div class=(Self::arrow_class(direction, true)) { (direction.icon()) }
        }
    }

    fn render_enabled_arrow(&self, direction: ArrowDirection, href: &str) -> Markup {
        html! {
            a href=(href) class=(Self::arrow_class(direction, false)) { (direction.icon()) }
        }
    }
}

/// Pagination control for a listing spread over several pages.
///
/// # Example
///
/// ```
/// use maud::Render;
/// use fixed_pagination::components::Pagination;
/// use fixed_pagination::pagination::PageUrlBuilder;
///
/// let urls = PageUrlBuilder::new("/invoices", Some("query=lee&page=3"));
/// let html = Pagination::new(3, 12, urls).render().into_string();
/// assert!(html.contains("/invoices?query=lee&amp;page=4"));
/// ```
#[derive(Debug, Clone)]
pub struct Pagination<R = DefaultRenderer> {
    /// Current page number (1-indexed)
    pub current_page: i64,
    /// Total number of pages
    pub total_pages: i64,
    /// Width budget for the page-number run
    pub max_visible_buttons: i64,
    urls: PageUrlBuilder,
    renderer: R,
}

impl Pagination<DefaultRenderer> {
    /// Create a pagination control with the default look and budget.
    #[must_use]
    pub fn new(current_page: i64, total_pages: i64, urls: PageUrlBuilder) -> Self {
        Self {
            current_page,
            total_pages,
            max_visible_buttons: DEFAULT_MAX_VISIBLE_BUTTONS,
            urls,
            renderer: DefaultRenderer,
        }
    }
}

impl<R: PaginationRenderer> Pagination<R> {
    #[must_use]
    pub fn with_max_visible_buttons(mut self, max_visible_buttons: i64) -> Self {
        self.max_visible_buttons = max_visible_buttons;
        self
    }

    /// Swap the renderer, keeping everything else.
    #[must_use]
    pub fn with_renderer<T: PaginationRenderer>(self, renderer: T) -> Pagination<T> {
        Pagination {
            current_page: self.current_page,
            total_pages: self.total_pages,
            max_visible_buttons: self.max_visible_buttons,
            urls: self.urls,
            renderer,
        }
    }

    /// The page tokens this control shows.
    #[must_use]
    pub fn tokens(&self) -> Vec<PageToken> {
        generate_fixed_pagination(self.current_page, self.total_pages, self.max_visible_buttons)
    }

    /// Link for the previous arrow, or `None` when it is disabled.
    #[must_use]
    pub fn previous_href(&self) -> Option<String> {
        (self.current_page > 1).then(|| self.urls.page_url(self.current_page - 1))
    }

    /// Link for the next arrow, or `None` when it is disabled.
    #[must_use]
    pub fn next_href(&self) -> Option<String> {
        (self.current_page < self.total_pages).then(|| self.urls.page_url(self.current_page + 1))
    }

    fn render_arrow(&self, direction: ArrowDirection) -> Markup {
        let href = match direction {
            ArrowDirection::Left => self.previous_href(),
            ArrowDirection::Right => self.next_href(),
        };
        match href {
            Some(href) => self.renderer.render_enabled_arrow(direction, &href),
            None => self.renderer.render_disabled_arrow(direction),
        }
    }

    fn render_token(&self, token: PageToken) -> Markup {
        match token {
            PageToken::Page(page) => {
                let href = self.urls.page_url(page);
                if page == self.current_page {
                    self.renderer.render_active_page(page, &href)
                } else {
                    self.renderer.render_inactive_page(page, &href)
                }
            }
            PageToken::Ellipsis => self.renderer.render_ellipsis(),
        }
    }
}

impl<R: PaginationRenderer> Render for Pagination<R> {
    fn render(&self) -> Markup {
        html! {
            div class="inline-flex" {
                (self.render_arrow(ArrowDirection::Left))
                div class="flex -space-x-px" {
                    @for token in self.tokens() {
                        (self.render_token(token))
                    }
                }
                (self.render_arrow(ArrowDirection::Right))
            }
        }
    }
}
