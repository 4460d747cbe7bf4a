pub mod help;
pub mod menu;
pub mod play;
pub mod summary;

use std::time::Duration;

use rand::Rng;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, AppState},
    figure::Figure,
    palette::{Hue, Shape},
};

use self::{help::HelpScreen, menu::MenuScreen, play::PlayScreen, summary::SummaryScreen};

pub fn draw<R: Rng>(app: &App<R>, now: Duration, f: &mut Frame) {
    let area = f.area();
    match &app.state {
        AppState::Menu => f.render_widget(MenuScreen, area),
        AppState::Help => f.render_widget(
            HelpScreen {
                duration: app.config.duration,
            },
            area,
        ),
        AppState::Playing(session) => f.render_widget(PlayScreen { session, now }, area),
        AppState::Summary { summary, ended_at } => f.render_widget(
            SummaryScreen {
                summary,
                settled: app.is_settled(*ended_at, now),
            },
            area,
        ),
    }
}

/// A figure as three spans: the glyph in its color, padded either with
/// selection brackets or with blanks of the same width.
pub fn figure_spans(figure: Figure, selected: bool) -> Vec<Span<'static>> {
    let glyph = Shape::from_index(figure.symbol)
        .map(Shape::glyph)
        .unwrap_or("?");
    let style = Hue::from_index(figure.color)
        .map(|hue| Style::default().fg(hue.color()))
        .unwrap_or_default();
    let (open, close) = if selected { ("[ ", " ]") } else { ("  ", "  ") };

    vec![Span::raw(open), Span::styled(glyph, style), Span::raw(close)]
}

pub fn line_width(line: &Line) -> usize {
    line.spans.iter().map(|s| s.content.width()).sum()
}

/// The smallest rect holding `lines`, centered in `area` and clipped to it.
pub fn centered(area: Rect, lines: &[Line]) -> Rect {
    let width = (lines.iter().map(line_width).max().unwrap_or(0) as u16).min(area.width);
    let height = (lines.len() as u16).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn selected_and_unselected_figures_have_the_same_width() {
        let selected = Line::from(figure_spans(Figure::new(0, 0), true));
        let plain = Line::from(figure_spans(Figure::new(0, 0), false));
        assert_eq!(line_width(&selected), line_width(&plain));
        assert_eq!(selected.spans[0].content, "[ ");
        assert_eq!(plain.spans[2].content, "  ");
    }

    #[test]
    fn figure_glyph_takes_its_color_from_the_color_index() {
        let spans = figure_spans(Figure::new(3, 1), false);
        assert_eq!(spans[1].content, "■");
        assert_eq!(spans[1].style.fg, Some(Color::Green));
    }

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 10, 4);
        let lines = vec![Line::from("a".repeat(20)); 6];
        assert_eq!(centered(area, &lines), area);

        let small = vec![Line::from("abcd"), Line::from("ab")];
        assert_eq!(centered(area, &small), Rect::new(3, 1, 4, 2));
    }
}
