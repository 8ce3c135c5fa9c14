//! # TitleBar Component
//!
//! Heading above the calculator: the title in bold, the banner underneath.
//!
//! Stateless; both lines are props taken from `App`:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.title.clone(), app.banner.clone());
//! title_bar.render(frame, header_area);
//! ```
//!
//! An empty banner collapses to a single line.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct TitleBar {
    pub title: String,
    pub banner: String,
}

impl TitleBar {
    pub fn new(title: String, banner: String) -> Self {
        Self { title, banner }
    }

    /// Rows needed to show both lines.
    pub fn height(&self) -> u16 {
        if self.banner.is_empty() { 1 } else { 2 }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            self.title.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))];
        if !self.banner.is_empty() {
            lines.push(Line::from(Span::styled(
                self.banner.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
