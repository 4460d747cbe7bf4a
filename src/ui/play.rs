use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{centered, figure_spans};
use crate::{figure::Figure, palette::PALETTE_SIZE, session::Session};

/// The running session: instructions, clock, score, selector and the round.
pub struct PlayScreen<'a> {
    pub session: &'a Session,
    pub now: Duration,
}

impl PlayScreen<'_> {
    fn selector_line(&self) -> Line<'static> {
        let spans = (0..PALETTE_SIZE)
            .flat_map(|i| figure_spans(Figure::new(i, i), i == self.session.selected))
            .collect::<Vec<_>>();
        Line::from(spans)
    }

    fn round_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw("------>")];
        spans.extend(figure_spans(self.session.round.first, false));
        spans.extend(figure_spans(self.session.round.second, false));
        spans.push(Span::raw("<------"));
        Line::from(spans)
    }
}

impl Widget for PlayScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(Span::styled("Move left with 'a' and right with 'd'", dim_style)),
            Line::from(Span::styled("Press <Enter> to confirm selection", dim_style)),
            Line::from(Span::styled("Wrong answer => 1s time penalty", dim_style)),
            Line::from(""),
            Line::from(Span::styled(
                format!("Remaining time: {}", self.session.remaining_secs(self.now)),
                bold_style,
            )),
            Line::from(Span::styled(
                format!("Current points: {}", self.session.score),
                bold_style,
            )),
            Line::from(""),
            self.selector_line(),
            Line::from(""),
            self.round_line(),
        ];

        let target = centered(area, &lines);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(target, buf);
    }
}
