//! # StatusBar Component
//!
//! Footer line: the app's status message followed by a short key legend.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const KEY_HELP: &str = "arrows+space / click | enter = | del CE | esc quit";

pub struct StatusBar {
    pub status_message: String,
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = if self.status_message.is_empty() {
            Line::from(Span::styled(KEY_HELP, Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(vec![
                Span::raw(self.status_message.as_str()),
                Span::styled(" | ", Style::default().fg(Color::DarkGray)),
                Span::styled(KEY_HELP, Style::default().fg(Color::DarkGray)),
            ])
        };
        frame.render_widget(line, area);
    }
}
