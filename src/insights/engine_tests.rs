#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::insights::advisory::priority_first;
use crate::insights::aggregate::aggregate;
use crate::models::{PaymentMethod, Transaction};

fn txn(category: &str, amount: Decimal, month: u32) -> Transaction {
    Transaction {
        id: format!("{category}-{month}"),
        category_id: category.into(),
        amount,
        date: NaiveDate::from_ymd_opt(2024, month, 10).unwrap(),
        description: "Test".into(),
        payment_method: PaymentMethod::Card,
    }
}

fn cat(id: &str, name: &str) -> Category {
    Category::new(id.into(), name.into(), String::new())
}

fn run(txns: &[Transaction], categories: &[Category], budgets: &[Budget]) -> Vec<Advisory> {
    let snap = aggregate(txns, budgets);
    generate_advisories(&snap, categories, budgets)
}

fn titles(advisories: &[Advisory]) -> Vec<&str> {
    advisories.iter().map(|a| a.title.as_str()).collect()
}

fn find<'a>(advisories: &'a [Advisory], title: &str) -> Option<&'a Advisory> {
    advisories.iter().find(|a| a.title == title)
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn test_empty_dataset_yields_nothing() {
    assert!(run(&[], &[], &[]).is_empty());
}

#[test]
fn test_surplus_with_food_spend() {
    let txns = vec![txn("salary", dec!(1000), 1), txn("food", dec!(-400), 1)];
    let out = run(&txns, &[], &[]);

    assert_eq!(
        titles(&out),
        vec![
            "Investment Opportunity",
            "Financial Health Overview",
            "Savings Rate Analysis",
            "Food & Dining Savings",
        ]
    );

    let invest = &out[0];
    assert!(invest.priority);
    assert_eq!(invest.severity, Severity::Highlight);
    assert!(invest.message.contains("$600.00"));
    assert!(invest.source_link.is_some());

    let rate = find(&out, "Savings Rate Analysis").unwrap();
    assert_eq!(rate.severity, Severity::Success);
    assert!(rate.message.contains("60.0%"));

    let food = find(&out, "Food & Dining Savings").unwrap();
    assert!(food.message.contains("$400.00"));
    assert!(!food.priority);
}

#[test]
fn test_food_budget_exceeded() {
    let txns = vec![txn("food", dec!(-150), 1)];
    let cats = vec![cat("food", "Food")];
    let budgets = vec![Budget::new("food".into(), dec!(100))];
    let out = run(&txns, &cats, &budgets);

    let alert = find(&out, "Budget Alert: Food").unwrap();
    assert_eq!(alert.severity, Severity::Critical);
    assert!(alert.message.contains("150.0%"));
    assert!(alert.message.contains(CategoryKind::Food.budget_tip()));
    assert_eq!(alert.source_link.as_deref(), CategoryKind::Food.link());
}

#[test]
fn test_rent_budget_approaching() {
    let txns = vec![txn("rent", dec!(-850), 1)];
    let cats = vec![cat("rent", "Rent")];
    let budgets = vec![Budget::new("rent".into(), dec!(1000))];
    let out = run(&txns, &cats, &budgets);

    let warn = find(&out, "Approaching Budget Limit").unwrap();
    assert_eq!(warn.severity, Severity::Warning);
    assert!(warn.message.contains("85.0%"));
    assert!(warn.message.contains("Rent"));
    assert!(find(&out, "Budget Alert: Rent").is_none());
}

// ── Budget alerts ─────────────────────────────────────────────

#[test]
fn test_budget_boundaries() {
    let cats = vec![cat("rent", "Rent")];
    let budgets = vec![Budget::new("rent".into(), dec!(1000))];

    let at_80 = run(&[txn("rent", dec!(-800), 1)], &cats, &budgets);
    assert!(find(&at_80, "Approaching Budget Limit").is_none());

    let at_100 = run(&[txn("rent", dec!(-1000), 1)], &cats, &budgets);
    assert!(find(&at_100, "Approaching Budget Limit").is_some());
    assert!(find(&at_100, "Budget Alert: Rent").is_none());

    let over = run(&[txn("rent", dec!(-1000.01), 1)], &cats, &budgets);
    assert!(find(&over, "Budget Alert: Rent").is_some());
}

#[test]
fn test_tiny_budget_ratio_past_decimal_range_is_critical() {
    let cats = vec![cat("rent", "Rent")];
    let budgets = vec![Budget::new("rent".into(), dec!(0.00000000000000000001))];
    let out = run(&[txn("rent", dec!(-1000000000), 1)], &cats, &budgets);

    let alert = find(&out, "Budget Alert: Rent").unwrap();
    assert_eq!(alert.severity, Severity::Critical);
    assert!(find(&out, "Approaching Budget Limit").is_none());
}

#[test]
fn test_tiny_income_gives_lowest_savings_rate() {
    let txns = vec![
        txn("salary", dec!(0.0000000000000001), 1),
        txn("rent", dec!(-100000000000000), 1),
    ];
    let snap = aggregate(&txns, &[]);
    assert_eq!(snap.savings_rate, Some(Decimal::MIN));

    let out = generate_advisories(&snap, &[], &[]);
    let rate = find(&out, "Savings Rate Analysis").unwrap();
    assert_eq!(rate.severity, Severity::Critical);
    assert!(find(&out, "Financial Health Overview")
        .unwrap()
        .message
        .contains("more than you earned"));
}

#[test]
fn test_trend_from_tiny_month_is_an_increase() {
    let txns = vec![
        txn("food", dec!(-0.00000000000000000001), 1),
        txn("food", dec!(-1000000000), 2),
    ];
    let out = run(&txns, &[], &[]);
    let trend = find(&out, "Spending Increase").unwrap();
    assert_eq!(trend.severity, Severity::Warning);
}

#[test]
fn test_budget_for_unlisted_category_uses_unknown_label() {
    let budgets = vec![Budget::new("gym".into(), dec!(50))];
    let out = run(&[txn("gym", dec!(-75), 1)], &[cat("food", "Food")], &budgets);

    let alert = find(&out, "Budget Alert: Unknown").unwrap();
    assert_eq!(alert.severity, Severity::Critical);
    assert!(alert.message.contains("Unknown budget"));
}

#[test]
fn test_listed_categories_alert_before_unlisted_budgets() {
    let cats = vec![cat("rent", "Rent")];
    let budgets = vec![
        Budget::new("gym".into(), dec!(100)),
        Budget::new("rent".into(), dec!(1000)),
    ];
    let txns = vec![txn("gym", dec!(-90), 1), txn("rent", dec!(-1500), 1)];
    let out = run(&txns, &cats, &budgets);

    let budget_titles: Vec<&str> = titles(&out)
        .into_iter()
        .filter(|t| t.starts_with("Budget Alert") || *t == "Approaching Budget Limit")
        .collect();
    assert_eq!(
        budget_titles,
        vec!["Budget Alert: Rent", "Approaching Budget Limit"]
    );
}

#[test]
fn test_budget_generic_tip_without_link() {
    let cats = vec![cat("rent", "Rent")];
    let budgets = vec![Budget::new("rent".into(), dec!(500))];
    let out = run(&[txn("rent", dec!(-900), 1)], &cats, &budgets);

    let alert = find(&out, "Budget Alert: Rent").unwrap();
    assert!(alert.message.contains(CategoryKind::Other.budget_tip()));
    assert!(alert.source_link.is_none());
}

#[test]
fn test_budget_tip_chosen_by_category_name() {
    let cats = vec![cat("c7", "Movies & Games")];
    let budgets = vec![Budget::new("c7".into(), dec!(50))];
    let out = run(&[txn("c7", dec!(-80), 1)], &cats, &budgets);

    let alert = find(&out, "Budget Alert: Movies & Games").unwrap();
    assert!(alert
        .message
        .contains(CategoryKind::Entertainment.budget_tip()));
}

#[test]
fn test_zero_or_missing_budget_is_skipped() {
    let cats = vec![cat("food", "Food"), cat("fun", "Fun")];
    let budgets = vec![Budget::new("food".into(), Decimal::ZERO)];
    let out = run(
        &[txn("food", dec!(-50), 1), txn("fun", dec!(-50), 1)],
        &cats,
        &budgets,
    );
    assert!(out.iter().all(|a| !a.title.starts_with("Budget Alert")));
    assert!(find(&out, "Approaching Budget Limit").is_none());
}

#[test]
fn test_budget_without_spend_is_skipped() {
    let cats = vec![cat("food", "Food")];
    let budgets = vec![Budget::new("food".into(), dec!(100))];
    let out = run(&[txn("salary", dec!(50), 1)], &cats, &budgets);
    assert!(out.iter().all(|a| !a.title.starts_with("Budget Alert")));
}

#[test]
fn test_duplicate_budget_first_match_wins() {
    let cats = vec![cat("food", "Food")];
    let budgets = vec![
        Budget::new("food".into(), dec!(100)),
        Budget::new("food".into(), dec!(10000)),
    ];
    let out = run(&[txn("food", dec!(-150), 1)], &cats, &budgets);
    assert!(find(&out, "Budget Alert: Food").is_some());
}

#[test]
fn test_budget_alerts_follow_category_order() {
    let cats = vec![cat("b", "Beta"), cat("a", "Alpha")];
    let budgets = vec![
        Budget::new("a".into(), dec!(10)),
        Budget::new("b".into(), dec!(10)),
    ];
    let out = run(&[txn("a", dec!(-20), 1), txn("b", dec!(-20), 1)], &cats, &budgets);
    let alerts: Vec<&str> = titles(&out)
        .into_iter()
        .filter(|t| t.starts_with("Budget Alert"))
        .collect();
    assert_eq!(alerts, vec!["Budget Alert: Beta", "Budget Alert: Alpha"]);
}

// ── Overview & savings rate ───────────────────────────────────

#[test]
fn test_overview_reports_overspend() {
    let out = run(
        &[txn("salary", dec!(1000), 1), txn("rent", dec!(-1200), 1)],
        &[],
        &[],
    );
    let overview = find(&out, "Financial Health Overview").unwrap();
    assert_eq!(overview.severity, Severity::Info);
    assert!(overview.message.contains("$200.00 more than you earned"));
    assert!(find(&out, "Investment Opportunity").is_none());
}

#[test]
fn test_overview_always_present_without_income() {
    let out = run(&[txn("rent", dec!(-20), 1)], &[], &[]);
    assert_eq!(titles(&out), vec!["Financial Health Overview"]);
}

#[test]
fn test_savings_rate_tiers() {
    let tier = |expense: Decimal| {
        let out = run(
            &[txn("salary", dec!(1000), 1), txn("rent", -expense, 1)],
            &[],
            &[],
        );
        find(&out, "Savings Rate Analysis").unwrap().severity
    };
    assert_eq!(tier(dec!(800)), Severity::Success);
    assert_eq!(tier(dec!(850)), Severity::Warning);
    assert_eq!(tier(dec!(900)), Severity::Warning);
    assert_eq!(tier(dec!(950)), Severity::Critical);
    assert_eq!(tier(dec!(1500)), Severity::Critical);
}

#[test]
fn test_small_surplus_is_not_an_opportunity() {
    let out = run(
        &[txn("salary", dec!(1000), 1), txn("rent", dec!(-900), 1)],
        &[],
        &[],
    );
    assert!(find(&out, "Investment Opportunity").is_none());
}

// ── Month-over-month trend ────────────────────────────────────

#[test]
fn test_trend_increase() {
    let out = run(&[txn("rent", dec!(-100), 1), txn("rent", dec!(-150), 2)], &[], &[]);
    let trend = find(&out, "Spending Increase").unwrap();
    assert_eq!(trend.severity, Severity::Warning);
    assert!(trend.message.contains("50.0%"));
    assert!(trend.message.contains("from January to February"));
}

#[test]
fn test_trend_decrease() {
    let out = run(&[txn("rent", dec!(-200), 1), txn("rent", dec!(-100), 2)], &[], &[]);
    let trend = find(&out, "Spending Decrease").unwrap();
    assert_eq!(trend.severity, Severity::Success);
    assert!(trend.message.contains("50.0%"));
}

#[test]
fn test_trend_within_band_is_silent() {
    let out = run(&[txn("rent", dec!(-100), 1), txn("rent", dec!(-110), 2)], &[], &[]);
    assert!(find(&out, "Spending Increase").is_none());
    assert!(find(&out, "Spending Decrease").is_none());
}

#[test]
fn test_trend_uses_last_two_months_seen() {
    let out = run(
        &[
            txn("rent", dec!(-1000), 1),
            txn("rent", dec!(-100), 2),
            txn("rent", dec!(-300), 3),
        ],
        &[],
        &[],
    );
    let trend = find(&out, "Spending Increase").unwrap();
    assert!(trend.message.contains("from February to March"));
    assert!(trend.message.contains("200.0%"));
}

#[test]
fn test_trend_pins_input_order_over_calendar_order() {
    // February arrives first, so January is treated as the latest month
    let out = run(&[txn("rent", dec!(-200), 2), txn("rent", dec!(-100), 1)], &[], &[]);
    let trend = find(&out, "Spending Decrease").unwrap();
    assert!(trend.message.contains("from February to January"));
    assert!(find(&out, "Spending Increase").is_none());
}

// ── Category tips ─────────────────────────────────────────────

#[test]
fn test_food_tip_threshold() {
    let at = run(&[txn("food", dec!(-200), 1)], &[], &[]);
    assert!(find(&at, "Food & Dining Savings").is_none());

    let over = run(&[txn("food", dec!(-200.01), 1)], &[], &[]);
    assert!(find(&over, "Food & Dining Savings").is_some());
}

#[test]
fn test_both_tips_fire() {
    let cats = vec![cat("c1", "Groceries"), cat("c2", "Transportation")];
    let out = run(
        &[txn("c1", dec!(-250), 1), txn("c2", dec!(-150), 1)],
        &cats,
        &[],
    );
    let tips: Vec<&str> = titles(&out)
        .into_iter()
        .filter(|t| t.ends_with("Savings"))
        .collect();
    assert_eq!(tips, vec!["Food & Dining Savings", "Transportation Savings"]);
}

#[test]
fn test_food_tip_sums_food_categories() {
    let cats = vec![cat("groceries", "Groceries"), cat("dining", "Dining Out")];
    let out = run(
        &[txn("groceries", dec!(-120), 1), txn("dining", dec!(-90), 1)],
        &cats,
        &[],
    );
    let tip = find(&out, "Food & Dining Savings").unwrap();
    assert!(tip.message.contains("$210.00"));
}

// ── Ordering ──────────────────────────────────────────────────

#[test]
fn test_priority_first_is_stable_partition() {
    let a = Advisory::new("A", "", Severity::Info);
    let b = Advisory::new("B", "", Severity::Warning);
    let p = Advisory::new("P", "", Severity::Highlight).prioritized();
    let c = Advisory::new("C", "", Severity::Critical);

    let ordered = priority_first(vec![a, b, p, c]);
    assert_eq!(titles(&ordered), vec!["P", "A", "B", "C"]);
}

#[test]
fn test_output_is_deterministic() {
    let cats = vec![cat("food", "Food"), cat("rent", "Rent")];
    let budgets = vec![
        Budget::new("food".into(), dec!(100)),
        Budget::new("rent".into(), dec!(1000)),
    ];
    let txns = vec![
        txn("salary", dec!(3000), 1),
        txn("food", dec!(-250), 1),
        txn("rent", dec!(-900), 2),
        txn("transport", dec!(-130), 2),
    ];
    let first = run(&txns, &cats, &budgets);
    let second = run(&txns, &cats, &budgets);
    assert_eq!(first, second);
    assert!(first[0].priority);
    assert_eq!(first.iter().filter(|a| a.priority).count(), 1);
}

#[test]
fn test_custom_thresholds() {
    let engine = RuleEngine::new(Thresholds {
        food_tip_spend: dec!(50),
        ..Thresholds::default()
    });
    let snap = aggregate(&[txn("food", dec!(-60), 1)], &[]);
    let out = engine.generate(&snap, &[], &[]);
    assert!(find(&out, "Food & Dining Savings").is_some());
}
