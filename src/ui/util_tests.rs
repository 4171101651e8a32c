#![allow(clippy::unwrap_used)]

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_advisory_title_fits_column() {
    assert_eq!(truncate("Savings Rate Analysis", 30), "Savings Rate Analysis");
    assert_eq!(
        truncate("Approaching Budget Limit", 24),
        "Approaching Budget Limit"
    );
}

#[test]
fn test_truncate_long_budget_alert_title() {
    let title = "Budget Alert: Entertainment & Streaming Services";
    let cut = truncate(title, 20);
    assert_eq!(cut, "Budget Alert: Enter…");
    assert_eq!(cut.chars().count(), 20);
}

#[test]
fn test_truncate_transaction_label() {
    assert_eq!(
        truncate("Monthly rent payment - Maple St apartment", 20),
        "Monthly rent paymen…"
    );
    assert_eq!(truncate("", 32), "");
}

#[test]
fn test_truncate_multibyte_category_names() {
    assert_eq!(truncate("Café & Bäckerei", 5), "Café…");
    assert_eq!(truncate("食費と外食", 3), "食費…");
}

#[test]
fn test_truncate_narrow_column() {
    // Title column shrinks to nothing on a tiny terminal
    assert_eq!(truncate("Financial Health Overview", 0), "");
    assert_eq!(truncate("Financial Health Overview", 1), "…");
    assert_eq!(truncate("$", 1), "$");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..4 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 4);
    assert_eq!(scroll, 2);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 5);
    assert_eq!(index, 2);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 2);
    assert_eq!(scroll, 2);

    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 20, 5);
    assert_eq!(index, 19);
    assert_eq!(scroll, 15);

    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 5);
    assert_eq!((index, scroll), (0, 0));
}
