use regex::Regex;

use crate::models::Category;

/// Broad spending kind used to pick canned tips and links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CategoryKind {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Other,
}

impl CategoryKind {
    /// Tip appended to a "budget exceeded" advisory.
    pub(crate) fn budget_tip(&self) -> &'static str {
        match self {
            Self::Food => {
                "Try meal planning, cooking at home more often, and buying staples in bulk."
            }
            Self::Transport => {
                "Consider carpooling or public transit, and combine errands into fewer trips."
            }
            Self::Entertainment => {
                "Look for free local events and cancel streaming services you rarely use."
            }
            Self::Shopping => {
                "Wait 48 hours before non-essential purchases and unsubscribe from retailer emails."
            }
            Self::Other => {
                "Review recent transactions in this category and look for expenses you can cut."
            }
        }
    }

    pub(crate) fn link(&self) -> Option<&'static str> {
        match self {
            Self::Food => Some("https://www.myplate.gov/eat-healthy/healthy-eating-budget"),
            Self::Transport => Some("https://www.fueleconomy.gov/feg/drive.shtml"),
            Self::Entertainment | Self::Shopping | Self::Other => None,
        }
    }
}

const KIND_PATTERNS: &[(&str, CategoryKind)] = &[
    (
        r"(?i)\b(food|dining|grocer(y|ies)|restaurants?|meals?|takeout)\b",
        CategoryKind::Food,
    ),
    (
        r"(?i)\b(transport(ation)?|travel|fuel|gas|transit|commute|parking|car)\b",
        CategoryKind::Transport,
    ),
    (
        r"(?i)\b(entertainment|movies?|games?|gaming|streaming|concerts?|fun)\b",
        CategoryKind::Entertainment,
    ),
    (
        r"(?i)\b(shopping|clothing|clothes|retail|apparel)\b",
        CategoryKind::Shopping,
    ),
];

pub(crate) struct KindClassifier {
    rules: Vec<(Regex, CategoryKind)>,
}

impl KindClassifier {
    pub(crate) fn new() -> Self {
        let rules = KIND_PATTERNS
            .iter()
            .filter_map(|(pattern, kind)| match Regex::new(pattern) {
                Ok(re) => Some((re, *kind)),
                Err(e) => {
                    tracing::warn!(pattern, error = %e, "Skipping invalid category kind pattern");
                    None
                }
            })
            .collect();

        Self { rules }
    }

    /// Classify a category by its id and, when known, its display name.
    /// The first pattern that matches either one wins.
    pub(crate) fn classify(&self, categories: &[Category], category_id: &str) -> CategoryKind {
        let name = Category::find_by_id(categories, category_id).map(|c| c.name.as_str());

        for (re, kind) in &self.rules {
            let matched =
                re.is_match(category_id) || name.is_some_and(|n| re.is_match(n));
            if matched {
                return *kind;
            }
        }

        CategoryKind::Other
    }
}

impl Default for KindClassifier {
    fn default() -> Self {
        Self::new()
    }
}
