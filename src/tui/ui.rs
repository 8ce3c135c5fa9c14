use crate::core::calculator::Mode;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::display_line::DISPLAY_HEIGHT;
use crate::tui::components::keypad::KEYPAD_HEIGHT;
use crate::tui::components::{DisplayLine, Keypad, StatusBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Width of the calculator body, borders included.
pub const CALC_WIDTH: u16 = 28;

/// Areas for each part of the screen, calculator centered horizontally.
pub struct ScreenLayout {
    pub header: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect, header_height: u16) -> ScreenLayout {
    use Constraint::{Length, Min};

    let [body, status] = Layout::vertical([Min(0), Length(1)]).areas(area);
    let [column] = Layout::horizontal([Length(CALC_WIDTH)])
        .flex(Flex::Center)
        .areas(body);
    let [header, display, keypad] = Layout::vertical([
        Length(header_height),
        Length(DISPLAY_HEIGHT),
        Length(KEYPAD_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    ScreenLayout {
        header,
        display,
        keypad,
        status,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let mut title_bar = TitleBar::new(app.title.clone(), app.banner.clone());
    let layout = screen_layout(frame.area(), title_bar.height());

    title_bar.render(frame, layout.header);

    let mut display = DisplayLine {
        text: app.display(),
        pending: app.calculator.pending().map(|p| p.operator.symbol()),
        is_error: matches!(app.calculator.mode(), Mode::Error(_)),
    };
    display.render(frame, layout.display);

    Keypad::new(&mut tui.keypad, app.last_key).render(frame, layout.keypad);

    let mut status = StatusBar {
        status_message: app.status_message.clone(),
    };
    status.render(frame, layout.status);
}
