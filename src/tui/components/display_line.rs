//! # DisplayLine Component
//!
//! The calculator's one-line readout. Text is right-aligned like a pocket
//! calculator; the pending operator sits in the top-left corner of the border.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

pub const DISPLAY_HEIGHT: u16 = 3;

pub struct DisplayLine {
    /// Text from `Calculator::current_display`
    pub text: String,
    /// Symbol of the pending operator, if any
    pub pending: Option<char>,
    pub is_error: bool,
}

impl Component for DisplayLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_error {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let mut block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
        if let Some(symbol) = self.pending {
            block = block.title(format!(" {symbol} "));
        }

        let visible = fit_to_width(&self.text, area.width.saturating_sub(2) as usize);

        let paragraph = Paragraph::new(visible)
            .style(style)
            .alignment(Alignment::Right)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Keep the most recent characters of an overlong readout, marking the cut
/// with a leading `…` so a dropped sign or leading digits stay visible.
fn fit_to_width(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail = &chars[chars.len() - (width - 1)..];
    std::iter::once('…').chain(tail.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(display: &mut DisplayLine, width: u16) -> String {
        let backend = TestBackend::new(width, DISPLAY_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                display.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_display_shows_text_and_pending() {
        let mut display = DisplayLine {
            text: "42".to_string(),
            pending: Some('+'),
            is_error: false,
        };
        let text = render_text(&mut display, 20);
        assert!(text.contains("42"));
        assert!(text.contains(" + "));
    }

    #[test]
    fn test_display_keeps_tail_of_long_entry() {
        let mut display = DisplayLine {
            text: "1234567890".to_string(),
            pending: None,
            is_error: false,
        };
        // 6 columns inside the border
        let text = render_text(&mut display, 8);
        assert!(text.contains("…67890"));
        assert!(!text.contains("12345"));
    }

    #[test]
    fn test_fit_to_width_marks_cut() {
        let negative = format!("-1{}", "0".repeat(30));
        let fitted = fit_to_width(&negative, 10);
        assert_eq!(fitted.chars().count(), 10);
        assert!(fitted.starts_with('…'));
        assert_eq!(fit_to_width("-42", 10), "-42");
        assert_eq!(fit_to_width("123", 0), "");
        assert_eq!(fit_to_width("1234", 1), "…");
    }
}
