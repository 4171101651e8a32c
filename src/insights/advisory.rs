/// Visual tier of an advisory. The front-end maps each tier to a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Info,
    Success,
    Warning,
    Critical,
    Highlight,
}

impl Severity {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Highlight => "highlight",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One generated recommendation or alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Advisory {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) severity: Severity,
    pub(crate) source_link: Option<String>,
    /// Only the investment opportunity advisory sets this.
    pub(crate) priority: bool,
}

impl Advisory {
    pub(crate) fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            source_link: None,
            priority: false,
        }
    }

    pub(crate) fn with_link(mut self, link: Option<&str>) -> Self {
        self.source_link = link.map(str::to_string);
        self
    }

    pub(crate) fn prioritized(mut self) -> Self {
        self.priority = true;
        self
    }
}

/// Move priority advisories to the front, keeping generation order within
/// each group.
pub(crate) fn priority_first(advisories: Vec<Advisory>) -> Vec<Advisory> {
    let (mut ordered, rest): (Vec<_>, Vec<_>) = advisories.into_iter().partition(|a| a.priority);
    ordered.extend(rest);
    ordered
}
