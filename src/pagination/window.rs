//! Fixed-width page window calculation.
//!
//! Decides which page numbers and ellipsis markers a pagination control
//! shows for a given button budget. Pure and stateless: callers invoke it on
//! every render with whatever values they currently hold.

use std::fmt;

use serde::{Serialize, Serializer};

/// Text shown for an omitted run of pages.
pub const ELLIPSIS: &str = "...";

/// One entry of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A 1-indexed page number.
    Page(i64),
    /// Placeholder for one or more omitted pages. Never navigable.
    Ellipsis,
}

impl PageToken {
    /// Returns the page number, or `None` for the ellipsis.
    #[must_use]
    pub fn page(self) -> Option<i64> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }

    #[must_use]
    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

// JSON consumers get a number or the literal "..." string.
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_i64(*n),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Compute the tokens for a fixed-width pagination control.
///
/// Page 1 always comes first. When `total_pages` fits in the budget every page
/// is listed; otherwise a window around `current_page` is shown between the
/// first and last page, with ellipses marking the gaps.
///
/// Inputs are not validated. Out-of-range values (a `current_page` outside
/// `1..=total_pages`, a non-positive `total_pages`, a budget below 5) yield
/// whatever the arithmetic produces, which may be degenerate but never panics
/// for realistic magnitudes.
///
/// # Example
///
/// ```
/// use fixed_pagination::pagination::{generate_fixed_pagination, PageToken};
///
/// let tokens = generate_fixed_pagination(5, 10, 5);
/// assert_eq!(
///     tokens,
///     vec![
///         PageToken::Page(1),
///         PageToken::Ellipsis,
///         PageToken::Page(5),
///         PageToken::Ellipsis,
///         PageToken::Page(10),
///     ]
/// );
/// ```
#[must_use]
pub fn generate_fixed_pagination(
    current_page: i64,
    total_pages: i64,
    max_visible_buttons: i64,
) -> Vec<PageToken> {
    let max_buttons = max_visible_buttons.min(total_pages);
    let mut pages = vec![PageToken::Page(1)];

    // Compared against the raw budget, not `max_buttons`.
    if total_pages <= max_visible_buttons {
        pages.extend((2..=total_pages).map(PageToken::Page));
        return pages;
    }

    // Saturating so extreme budgets or page counts cannot overflow.
    let half = max_buttons.div_euclid(2);
    let (start, end) = if current_page <= half {
        (2, max_buttons.saturating_sub(2))
    } else if current_page > total_pages.saturating_sub(half) {
        (
            total_pages.saturating_sub(max_buttons.saturating_sub(3)),
            total_pages.saturating_sub(1),
        )
    } else {
        let spread = max_buttons.saturating_sub(4).div_euclid(2);
        (
            current_page.saturating_sub(spread),
            current_page.saturating_add(spread),
        )
    };

    if start > 2 {
        pages.push(PageToken::Ellipsis);
    }
    pages.extend((start..=end).map(PageToken::Page));
    if end < total_pages.saturating_sub(1) {
        pages.push(PageToken::Ellipsis);
    }
    pages.push(PageToken::Page(total_pages));

    pages
}
