use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use rust_decimal::Decimal;

use crate::format::{format_amount, format_percent};
use crate::insights::Advisory;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(6),    // Advisories
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_advisory_list(f, body[0], app);
    render_advisory_detail(f, body[1], app.report.advisories.get(app.insight_index));
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let snap = &app.report.snapshot;
    let net = snap.net();
    let net_color = if net >= Decimal::ZERO {
        theme::GREEN
    } else {
        theme::RED
    };

    render_card(f, cards[0], "Income", format_amount(snap.total_income), theme::GREEN);
    render_card(f, cards[1], "Expenses", format_amount(snap.total_expense), theme::RED);
    render_card(f, cards[2], "Net", format_amount(net), net_color);
    let rate = snap
        .savings_rate
        .map(format_percent)
        .unwrap_or_else(|| "n/a".into());
    render_card(f, cards[3], "Savings Rate", rate, theme::ACCENT);
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn list_block(count: usize) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Insights ({count}) "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}

fn render_advisory_list(f: &mut Frame, area: Rect, app: &App) {
    let advisories = &app.report.advisories;
    if advisories.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No insights yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add transactions.csv to the data directory and press r",
                theme::dim_style(),
            )),
        ];
        f.render_widget(
            Paragraph::new(msg)
                .centered()
                .wrap(Wrap { trim: true })
                .block(list_block(0)),
            area,
        );
        return;
    }

    let title_width = area.width.saturating_sub(16) as usize;
    let rows: Vec<Row> = advisories
        .iter()
        .enumerate()
        .skip(app.insight_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, advisory)| {
            let color = theme::severity_color(advisory.severity);
            let marker = if advisory.priority { "★" } else { " " };
            let style = if i == app.insight_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(Span::styled(
                    advisory.severity.as_str(),
                    Style::default().fg(color),
                )),
                Cell::from(truncate(&advisory.title, title_width)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(10),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths).block(list_block(advisories.len()));
    f.render_widget(table, area);
}

fn render_advisory_detail(f: &mut Frame, area: Rect, advisory: Option<&Advisory>) {
    let Some(advisory) = advisory else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY));
        f.render_widget(block, area);
        return;
    };

    let color = theme::severity_color(advisory.severity);
    let mut text = vec![
        Line::from(Span::styled(
            advisory.title.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(advisory.message.as_str(), theme::normal_style())),
    ];
    if let Some(link) = &advisory.source_link {
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Learn more: ", theme::dim_style()),
            Span::styled(
                link.as_str(),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    let detail = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", advisory.severity),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(detail, area);
}
