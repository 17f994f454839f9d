//! Inline SVG icons.

use maud::{html, Markup};

/// Outline arrow pointing left (24x24 viewBox).
const ARROW_LEFT_PATH: &str = "M10.5 19.5 3 12m0 0 7.5-7.5M3 12h18";

/// Outline arrow pointing right (24x24 viewBox).
const ARROW_RIGHT_PATH: &str = "M13.5 4.5 21 12m0 0-7.5 7.5M21 12H3";

fn outline_icon(path: &str, class: &str) -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            aria-hidden="true"
            class=(class) {
            path stroke-linecap="round" stroke-linejoin="round" d=(path) {}
        }
    }
}

#[must_use]
pub fn arrow_left(class: &str) -> Markup {
    outline_icon(ARROW_LEFT_PATH, class)
}

#[must_use]
pub fn arrow_right(class: &str) -> Markup {
    outline_icon(ARROW_RIGHT_PATH, class)
}
