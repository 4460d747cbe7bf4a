use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::centered;
use crate::session::SessionSummary;

const RULE: &str = "-------------------------------------";

pub struct SummaryScreen<'a> {
    pub summary: &'a SessionSummary,
    /// Whether keys are accepted again.
    pub settled: bool,
}

impl Widget for SummaryScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let summary = self.summary;
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let details = match summary.accuracy() {
            Some(accuracy) => format!(
                "{} rounds   {}% acc   {}s penalty",
                summary.rounds_played, accuracy, summary.penalty_secs
            ),
            None => "no rounds played".to_string(),
        };

        let mut lines = vec![
            Line::from(RULE),
            Line::from(""),
            Line::from(Span::styled(
                format!("You got {} points", summary.score),
                bold_style,
            )),
            Line::from(""),
            Line::from(RULE),
            Line::from(""),
            Line::from(Span::styled(details, italic_style)),
        ];

        if summary.quit_early {
            lines.push(Line::from(Span::styled("(session ended early)", italic_style)));
        }

        lines.push(Line::from(""));
        lines.push(if self.settled {
            Line::from(Span::styled(
                "Press any key to continue!",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from("")
        });

        let target = centered(area, &lines);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(target, buf);
    }
}
