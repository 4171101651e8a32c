use rust_decimal::Decimal;

use super::advisory::{priority_first, Advisory, Severity};
use super::aggregate::{percent_of, AggregateSnapshot};
use super::kinds::{CategoryKind, KindClassifier};
use crate::format::{format_amount, format_percent};
use crate::models::{Budget, Category};

const INVESTMENT_LINK: &str = "https://www.investor.gov/introduction-investing";

/// Cut-off values the rules compare against. All percentages are 0-100.
#[derive(Debug, Clone)]
pub(crate) struct Thresholds {
    /// Surplus (income minus expense) above which investing is suggested.
    pub(crate) investment_surplus: Decimal,
    pub(crate) savings_excellent: Decimal,
    pub(crate) savings_fair: Decimal,
    pub(crate) budget_warning: Decimal,
    pub(crate) budget_exceeded: Decimal,
    /// Minimum absolute month-over-month change worth reporting.
    pub(crate) trend_change: Decimal,
    pub(crate) food_tip_spend: Decimal,
    pub(crate) transport_tip_spend: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            investment_surplus: Decimal::ONE_HUNDRED,
            savings_excellent: Decimal::from(20),
            savings_fair: Decimal::TEN,
            budget_warning: Decimal::from(80),
            budget_exceeded: Decimal::ONE_HUNDRED,
            trend_change: Decimal::TEN,
            food_tip_spend: Decimal::from(200),
            transport_tip_spend: Decimal::ONE_HUNDRED,
        }
    }
}

struct RuleContext<'a> {
    snapshot: &'a AggregateSnapshot,
    categories: &'a [Category],
    budgets: &'a [Budget],
    thresholds: &'a Thresholds,
    classifier: &'a KindClassifier,
}

struct Rule {
    name: &'static str,
    run: fn(&RuleContext) -> Vec<Advisory>,
}

/// Evaluated top to bottom. No rule suppresses another.
const RULES: &[Rule] = &[
    Rule {
        name: "investment-opportunity",
        run: investment_opportunity,
    },
    Rule {
        name: "health-overview",
        run: health_overview,
    },
    Rule {
        name: "savings-rate",
        run: savings_rate,
    },
    Rule {
        name: "budget-alerts",
        run: budget_alerts,
    },
    Rule {
        name: "monthly-trend",
        run: monthly_trend,
    },
    Rule {
        name: "category-tips",
        run: category_tips,
    },
];

pub(crate) struct RuleEngine {
    thresholds: Thresholds,
    classifier: KindClassifier,
}

impl RuleEngine {
    pub(crate) fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            classifier: KindClassifier::new(),
        }
    }

    /// Run every rule against the snapshot. The result is deterministic for
    /// identical inputs, with the priority advisory (if any) first.
    pub(crate) fn generate(
        &self,
        snapshot: &AggregateSnapshot,
        categories: &[Category],
        budgets: &[Budget],
    ) -> Vec<Advisory> {
        if snapshot.is_empty() {
            return Vec::new();
        }

        let ctx = RuleContext {
            snapshot,
            categories,
            budgets,
            thresholds: &self.thresholds,
            classifier: &self.classifier,
        };

        let mut advisories = Vec::new();
        for rule in RULES {
            let produced = (rule.run)(&ctx);
            tracing::debug!(rule = rule.name, emitted = produced.len(), "Rule evaluated");
            advisories.extend(produced);
        }

        priority_first(advisories)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

/// Generate advisories with the default thresholds.
pub(crate) fn generate_advisories(
    snapshot: &AggregateSnapshot,
    categories: &[Category],
    budgets: &[Budget],
) -> Vec<Advisory> {
    RuleEngine::default().generate(snapshot, categories, budgets)
}

// ── Rules ────────────────────────────────────────────────────

fn investment_opportunity(ctx: &RuleContext) -> Vec<Advisory> {
    let surplus = ctx.snapshot.net();
    if surplus <= ctx.thresholds.investment_surplus {
        return Vec::new();
    }

    let message = format!(
        "You have {} left over after expenses. Put it to work: build an emergency fund \
         covering 3-6 months of expenses, raise your retirement contributions, or start \
         a low-cost index fund.",
        format_amount(surplus)
    );
    vec![
        Advisory::new("Investment Opportunity", message, Severity::Highlight)
            .with_link(Some(INVESTMENT_LINK))
            .prioritized(),
    ]
}

fn health_overview(ctx: &RuleContext) -> Vec<Advisory> {
    let s = ctx.snapshot;
    let outcome = if s.total_income > s.total_expense {
        let rate = s.savings_rate.unwrap_or(Decimal::ZERO);
        format!(
            "You saved {} ({} of your income).",
            format_amount(s.net()),
            format_percent(rate)
        )
    } else {
        format!(
            "You spent {} more than you earned.",
            format_amount(s.total_expense - s.total_income)
        )
    };

    let message = format!(
        "Income: {}. Expenses: {}. {outcome}",
        format_amount(s.total_income),
        format_amount(s.total_expense)
    );
    vec![Advisory::new("Financial Health Overview", message, Severity::Info)]
}

fn savings_rate(ctx: &RuleContext) -> Vec<Advisory> {
    let Some(rate) = ctx.snapshot.savings_rate else {
        return Vec::new();
    };
    let t = ctx.thresholds;

    let (severity, message) = if rate >= t.savings_excellent {
        (
            Severity::Success,
            format!(
                "Excellent! You are saving {} of your income. Keep it up.",
                format_percent(rate)
            ),
        )
    } else if rate >= t.savings_fair {
        (
            Severity::Warning,
            format!(
                "You are saving {} of your income. Try to improve it to {}% or more.",
                format_percent(rate),
                t.savings_excellent
            ),
        )
    } else {
        (
            Severity::Critical,
            format!(
                "Your savings rate is {}. Reduce spending to save at least {}% of \
                 your income.",
                format_percent(rate),
                t.savings_fair
            ),
        )
    };

    vec![Advisory::new("Savings Rate Analysis", message, severity)]
}

fn budget_alerts(ctx: &RuleContext) -> Vec<Advisory> {
    let t = ctx.thresholds;
    let mut out = Vec::new();

    for category_id in budget_targets(ctx) {
        let Some(budget) = Budget::find_for(ctx.budgets, category_id) else {
            continue;
        };
        let spent = ctx.snapshot.category_expense(category_id);
        if budget.amount <= Decimal::ZERO || spent.is_zero() {
            continue;
        }

        // Spend and budget are both positive, so an overflow is past every band
        let pct = percent_of(spent, budget.amount).unwrap_or(Decimal::MAX);
        let name = Category::label_for(ctx.categories, category_id);
        if pct > t.budget_exceeded {
            let kind = ctx.classifier.classify(ctx.categories, category_id);
            let message = format!(
                "You have spent {} of your {} {} budget ({}). {}",
                format_amount(spent),
                format_amount(budget.amount),
                name,
                format_percent(pct),
                kind.budget_tip()
            );
            out.push(
                Advisory::new(format!("Budget Alert: {name}"), message, Severity::Critical)
                    .with_link(kind.link()),
            );
        } else if pct > t.budget_warning {
            let message = format!(
                "You have used {} of your {} budget ({} of {}).",
                format_percent(pct),
                name,
                format_amount(spent),
                format_amount(budget.amount)
            );
            out.push(Advisory::new(
                "Approaching Budget Limit",
                message,
                Severity::Warning,
            ));
        }
    }

    out
}

/// Category ids to check against budgets: the category list in order, then
/// budgeted ids that have no category row, in budget order.
fn budget_targets<'a>(ctx: &RuleContext<'a>) -> Vec<&'a str> {
    let mut ids: Vec<&str> = ctx.categories.iter().map(|c| c.id.as_str()).collect();
    for budget in ctx.budgets {
        if !ids.contains(&budget.category_id.as_str()) {
            tracing::debug!(category = %budget.category_id, "Budget has no category row");
            ids.push(budget.category_id.as_str());
        }
    }
    ids
}

/// Compares the last two month buckets in iteration order, which follows the
/// input order of transactions rather than the calendar.
fn monthly_trend(ctx: &RuleContext) -> Vec<Advisory> {
    let [.., (prev_month, prev), (last_month, last)] = ctx.snapshot.per_month_expense.as_slice()
    else {
        return Vec::new();
    };
    if prev.is_zero() {
        return Vec::new();
    }

    // A drop is bounded by -100%, so only a rise can overflow
    let change = percent_of(*last - *prev, *prev).unwrap_or(Decimal::MAX);
    if change.abs() <= ctx.thresholds.trend_change {
        return Vec::new();
    }

    let advisory = if change > Decimal::ZERO {
        Advisory::new(
            "Spending Increase",
            format!(
                "Your spending rose {} from {prev_month} to {last_month}. \
                 Review your spending to find what changed.",
                format_percent(change)
            ),
            Severity::Warning,
        )
    } else {
        Advisory::new(
            "Spending Decrease",
            format!(
                "Your spending fell {} from {prev_month} to {last_month}. Keep it up!",
                format_percent(change.abs())
            ),
            Severity::Success,
        )
    };
    vec![advisory]
}

fn category_tips(ctx: &RuleContext) -> Vec<Advisory> {
    let t = ctx.thresholds;
    let mut out = Vec::new();

    let food = kind_spend(ctx, CategoryKind::Food);
    if food > t.food_tip_spend {
        let message = format!(
            "You spent {} on food. Plan meals for the week, shop with a list, cook in \
             batches, and choose store brands.",
            format_amount(food)
        );
        out.push(
            Advisory::new("Food & Dining Savings", message, Severity::Info)
                .with_link(CategoryKind::Food.link()),
        );
    }

    let transport = kind_spend(ctx, CategoryKind::Transport);
    if transport > t.transport_tip_spend {
        let message = format!(
            "You spent {} on transportation. Carpool, use public transit, keep tires \
             inflated, and compare fuel prices before filling up.",
            format_amount(transport)
        );
        out.push(
            Advisory::new("Transportation Savings", message, Severity::Info)
                .with_link(CategoryKind::Transport.link()),
        );
    }

    out
}

fn kind_spend(ctx: &RuleContext, kind: CategoryKind) -> Decimal {
    ctx.snapshot
        .per_category_expense
        .iter()
        .filter(|(id, _)| ctx.classifier.classify(ctx.categories, id) == kind)
        .fold(Decimal::ZERO, |acc, (_, total)| acc.saturating_add(*total))
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
