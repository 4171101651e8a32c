use ratatui::style::{Color, Modifier, Style};

use crate::insights::Severity;

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const HEADER_FG: Color = Color::Rgb(205, 214, 244);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const MAUVE: Color = Color::Rgb(203, 166, 247);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

/// Fixed color token for each advisory tier.
pub(crate) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => ACCENT,
        Severity::Success => GREEN,
        Severity::Warning => YELLOW,
        Severity::Critical => RED,
        Severity::Highlight => MAUVE,
    }
}

/// Parse a `#rrggbb` category color; anything else falls back to dim text.
pub(crate) fn category_color(hex: &str) -> Color {
    parse_hex(hex).unwrap_or(TEXT_DIM)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn income_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_color_parses_hex() {
        assert_eq!(category_color("#ff8800"), Color::Rgb(255, 136, 0));
        assert_eq!(category_color("#00FF7f"), Color::Rgb(0, 255, 127));
    }

    #[test]
    fn test_category_color_fallback() {
        assert_eq!(category_color(""), TEXT_DIM);
        assert_eq!(category_color("ff8800"), TEXT_DIM);
        assert_eq!(category_color("#ff88"), TEXT_DIM);
        assert_eq!(category_color("#gg0000"), TEXT_DIM);
        assert_eq!(category_color("#ü0000"), TEXT_DIM);
    }

    #[test]
    fn test_every_severity_has_distinct_color() {
        let tiers = [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Critical,
            Severity::Highlight,
        ];
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(severity_color(*a), severity_color(*b));
            }
        }
    }
}
