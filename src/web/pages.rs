//! Preview page showing the pagination control under a placeholder listing.

use std::ops::RangeInclusive;

use maud::{html, Markup, Render};

use crate::components::{BaseLayout, Pagination};

/// Render the preview page.
///
/// `rows` are the 1-based row numbers that fall on the current page.
#[must_use]
pub fn render_preview(pagination: &Pagination, rows: RangeInclusive<i64>) -> Markup {
    let content = html! {
        h1 class="mb-2 text-2xl" { "Pagination preview" }
        p class="mb-6 text-sm text-gray-500" {
            "Page " (pagination.current_page) " of " (pagination.total_pages)
        }
        ul class="mb-6 divide-y rounded-md border" {
            @for row in rows {
                li class="px-4 py-2" { "Row " (row) }
            }
        }
        div class="flex w-full justify-center" {
            (pagination.render())
        }
    };

    BaseLayout::new("Preview")
        .with_description("Fixed-width pagination control preview")
        .render(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageUrlBuilder;

    #[test]
    fn test_render_preview() {
        let pagination = Pagination::new(2, 4, PageUrlBuilder::new("/", None));
        let html = render_preview(&pagination, 11..=20).into_string();

        assert!(html.contains("Page 2 of 4"));
        assert!(html.contains("Row 11"));
        assert!(html.contains("Row 20"));
        assert!(!html.contains("Row 21"));
        assert!(html.contains(r#"href="/?page=3""#));
    }

    #[test]
    fn test_render_preview_empty_rows() {
        let pagination = Pagination::new(1, 1, PageUrlBuilder::new("/", None));
        #[allow(clippy::reversed_empty_ranges)]
        let html = render_preview(&pagination, 1..=0).into_string();
        assert!(!html.contains("Row "));
    }
}
