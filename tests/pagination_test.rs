//! Integration tests for the pagination pipeline: query string in, markup out.

use fixed_pagination::components::{ArrowDirection, Pagination, PaginationRenderer, Render};
use fixed_pagination::pagination::{
    clamp_page, current_page_from_query, generate_fixed_pagination, PageToken, PageUrlBuilder,
};
use maud::{html, Markup};

/// Renders the control as a compact list of what a user can click.
struct ListRenderer;

impl PaginationRenderer for ListRenderer {
    fn render_active_page(&self, page: i64, href: &str) -> Markup {
        html! { li.active { a href=(href) { (page) } } }
    }

    fn render_inactive_page(&self, page: i64, href: &str) -> Markup {
        html! { li { a href=(href) { (page) } } }
    }

    fn render_ellipsis(&self) -> Markup {
        html! { li.gap { "…" } }
    }

    fn render_disabled_arrow(&self, direction: ArrowDirection) -> Markup {
        let label = match direction {
            ArrowDirection::Left => "prev",
            ArrowDirection::Right => "next",
        };
        html! { li.disabled { (label) } }
    }

    fn render_enabled_arrow(&self, direction: ArrowDirection, href: &str) -> Markup {
        let label = match direction {
            ArrowDirection::Left => "prev",
            ArrowDirection::Right => "next",
        };
        html! { li { a href=(href) { (label) } } }
    }
}

fn control_for(path: &str, query: Option<&str>, total_pages: i64) -> Pagination {
    let current = clamp_page(current_page_from_query(query, "page"), total_pages);
    Pagination::new(current, total_pages, PageUrlBuilder::new(path, query))
}

#[test]
fn test_reference_scenarios() {
    use fixed_pagination::pagination::PageToken::{Ellipsis, Page};

    let cases: &[(i64, i64, &[PageToken])] = &[
        (1, 3, &[Page(1), Page(2), Page(3)]),
        (1, 10, &[Page(1), Page(2), Page(3), Ellipsis, Page(10)]),
        (10, 10, &[Page(1), Ellipsis, Page(8), Page(9), Page(10)]),
        (5, 10, &[Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]),
        (6, 20, &[Page(1), Ellipsis, Page(6), Ellipsis, Page(20)]),
    ];

    for (current, total, expected) in cases {
        assert_eq!(
            generate_fixed_pagination(*current, *total, 5),
            expected.to_vec(),
            "compute({current}, {total}, 5)"
        );
    }
}

#[test]
fn test_query_to_markup() {
    let html = control_for("/invoices", Some("query=acme&page=6"), 20)
        .with_renderer(ListRenderer)
        .render()
        .into_string();

    assert!(html.contains(r#"<li><a href="/invoices?query=acme&amp;page=5">prev</a></li>"#));
    assert!(html.contains(r#"<li class="active"><a href="/invoices?query=acme&amp;page=6">6</a></li>"#));
    assert!(html.contains(r#"<li><a href="/invoices?query=acme&amp;page=7">next</a></li>"#));
    assert_eq!(html.matches(r#"<li class="gap">"#).count(), 2);
}

#[test]
fn test_missing_page_defaults_to_first() {
    let html = control_for("/invoices", None, 8)
        .with_renderer(ListRenderer)
        .render()
        .into_string();

    assert!(html.contains(r#"<li class="disabled">prev</li>"#));
    assert!(html.contains(r#"<li class="active"><a href="/invoices?page=1">1</a></li>"#));
    assert!(html.contains(r#"<a href="/invoices?page=2">next</a>"#));
}

#[test]
fn test_last_page_disables_next() {
    let html = control_for("/invoices", Some("page=8"), 8)
        .with_renderer(ListRenderer)
        .render()
        .into_string();

    assert!(html.contains(r#"<li class="disabled">next</li>"#));
    assert!(html.contains(r#"<a href="/invoices?page=7">prev</a>"#));
}

#[test]
fn test_every_page_link_round_trips() {
    // Following any rendered page link lands on that page.
    let total = 15;
    for current in 1..=total {
        let query = format!("sort=asc&page={current}");
        let urls = PageUrlBuilder::new("/list", Some(&query));
        for token in generate_fixed_pagination(current, total, 5) {
            if let Some(href) = urls.href_for(token) {
                let (_, next_query) = href.split_once('?').unwrap();
                assert_eq!(
                    Some(current_page_from_query(Some(next_query), "page")),
                    token.page()
                );
                assert!(next_query.starts_with("sort=asc&"));
            }
        }
    }
}
