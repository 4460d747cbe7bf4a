use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::centered;

pub struct MenuScreen;

impl Widget for MenuScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "termrush",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press 's' to start game"),
            Line::from("Press 'h' for help"),
            Line::from("Press 'q' to quit"),
        ];

        let target = centered(area, &lines);
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(target, buf);
    }
}
