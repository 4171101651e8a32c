use anyhow::Result;
use std::path::PathBuf;

use crate::import::Dataset;
use crate::report::Report;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Insights,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Insights, Self::Transactions]
    }

    pub(crate) fn next(self) -> Self {
        let screens = Self::all();
        let idx = screens.iter().position(|s| *s == self).unwrap_or(0);
        screens[(idx + 1) % screens.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let screens = Self::all();
        let idx = screens.iter().position(|s| *s == self).unwrap_or(0);
        screens[(idx + screens.len() - 1) % screens.len()]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Insights => write!(f, "Insights"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) visible_rows: usize,
    pub(crate) data_dir: PathBuf,
    pub(crate) report: Report,

    pub(crate) insight_index: usize,
    pub(crate) insight_scroll: usize,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
}

impl App {
    pub(crate) fn new(report: Report, data_dir: PathBuf) -> Self {
        Self {
            running: true,
            screen: Screen::Insights,
            status_message: String::new(),
            show_help: false,
            visible_rows: 20,
            data_dir,
            report,
            insight_index: 0,
            insight_scroll: 0,
            transaction_index: 0,
            transaction_scroll: 0,
        }
    }

    /// Re-read the dataset from disk and recompute everything.
    /// On failure the previous report stays on screen.
    pub(crate) fn reload(&mut self) -> Result<()> {
        let dataset = Dataset::load(&self.data_dir)?;
        self.report = Report::build(dataset, chrono::Local::now().date_naive());
        self.insight_index = 0;
        self.insight_scroll = 0;
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.set_status(format!(
            "Reloaded {} transactions, {} insights",
            self.report.dataset.transactions.len(),
            self.report.advisories.len()
        ));
        Ok(())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    fn cursor(&mut self) -> (&mut usize, &mut usize, usize) {
        match self.screen {
            Screen::Insights => (
                &mut self.insight_index,
                &mut self.insight_scroll,
                self.report.advisories.len(),
            ),
            Screen::Transactions => (
                &mut self.transaction_index,
                &mut self.transaction_scroll,
                self.report.rows.len(),
            ),
        }
    }

    pub(crate) fn move_down(&mut self) {
        let page = self.visible_rows;
        let (index, scroll, len) = self.cursor();
        scroll_down(index, scroll, len, page);
    }

    pub(crate) fn move_up(&mut self) {
        let (index, scroll, _) = self.cursor();
        scroll_up(index, scroll);
    }

    pub(crate) fn goto_top(&mut self) {
        let (index, scroll, _) = self.cursor();
        scroll_to_top(index, scroll);
    }

    pub(crate) fn goto_bottom(&mut self) {
        let page = self.visible_rows;
        let (index, scroll, len) = self.cursor();
        scroll_to_bottom(index, scroll, len, page);
    }
}
