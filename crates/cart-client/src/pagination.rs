//! Page-button windowing for the admin order list.
//!
//! For `total_pages > 1` the controls are:
//! - Previous (disabled on the first page)
//! - page 1, the last page, and the current page ± 1
//! - an ellipsis in place of current ± 2
//! - Next (disabled on the last page)
//!
//! A single page (or none) shows no controls at all.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: u32, enabled: bool },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: u32, enabled: bool },
}

pub fn page_controls(current: u32, total_pages: u32) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::with_capacity(total_pages.min(9) as usize + 2);

    controls.push(PageControl::Previous {
        target: current.saturating_sub(1).max(1),
        enabled: current > 1,
    });

    // Only 1, the last page and current ± 2 can produce a control.
    let lo = current.saturating_sub(2).max(2);
    let hi = current.saturating_add(2).min(total_pages - 1);
    let candidates = std::iter::once(1)
        .chain(lo..=hi)
        .chain(std::iter::once(total_pages));

    for i in candidates {
        let near_current = i.saturating_add(1) >= current && i <= current.saturating_add(1);
        if i == 1 || i == total_pages || near_current {
            controls.push(PageControl::Page {
                number: i,
                active: i == current,
            });
        } else if i.saturating_add(2) == current || i == current.saturating_add(2) {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.push(PageControl::Next {
        target: current.saturating_add(1).min(total_pages),
        enabled: current < total_pages,
    });

    controls
}

/// Compact text rendering, e.g. `‹ 1 … 4 [5] 6 … 10 ›`.
pub fn render_controls(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|c| match c {
            PageControl::Previous { enabled, .. } => {
                if *enabled { "‹ Prev" } else { "  Prev" }.to_string()
            }
            PageControl::Page { number, active: true } => format!("[{number}]"),
            PageControl::Page { number, active: false } => number.to_string(),
            PageControl::Ellipsis => "…".to_string(),
            PageControl::Next { enabled, .. } => {
                if *enabled { "Next ›" } else { "Next  " }.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
