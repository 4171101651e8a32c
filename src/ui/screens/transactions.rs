use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = &app.report.rows;
    if rows.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                format!("Looking in {}", app.data_dir.display()),
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Transactions (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Amount", "When"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, row)| {
            let is_cursor = i == app.transaction_index;

            let amount_style = if row.is_credit {
                theme::income_style()
            } else {
                theme::expense_style()
            };

            let style = if is_cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(format!("  {}", row.date.format("%Y-%m-%d"))),
                Cell::from(truncate(&row.label, 40)),
                Cell::from(Span::styled(
                    truncate(&row.category, 18),
                    Style::default().fg(theme::category_color(&row.color)),
                )),
                Cell::from(Span::styled(row.amount.as_str(), amount_style)),
                Cell::from(Span::styled(row.when.as_str(), theme::dim_style())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let table = Table::new(table_rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Transactions ({}) ", rows.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
