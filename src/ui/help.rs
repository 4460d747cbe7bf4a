use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{centered, figure_spans};
use crate::{
    evaluator::{answer, Answer},
    figure::{Figure, GameRound},
    palette::{Hue, Shape, PALETTE_SIZE},
};

/// One figure off its color, one canonical.
const MATCH_EXAMPLE: GameRound = GameRound {
    first: Figure {
        symbol: 0,
        color: 2,
    },
    second: Figure {
        symbol: 3,
        color: 3,
    },
};

/// Neither figure canonical.
const ABSENT_EXAMPLE: GameRound = GameRound {
    first: Figure {
        symbol: 0,
        color: 1,
    },
    second: Figure {
        symbol: 2,
        color: 3,
    },
};

pub struct HelpScreen {
    pub duration: Duration,
}

fn round_line(round: GameRound) -> Line<'static> {
    let mut spans = figure_spans(round.first, false);
    spans.extend(figure_spans(round.second, false));
    Line::from(spans)
}

fn name(figure: Figure) -> String {
    match (Hue::from_index(figure.color), Shape::from_index(figure.symbol)) {
        (Some(hue), Some(shape)) => format!("{hue} {shape}"),
        _ => "figure".to_string(),
    }
}

fn help_lines(duration: Duration) -> Vec<Line<'static>> {
    let palette = (0..PALETTE_SIZE)
        .flat_map(|i| figure_spans(Figure::new(i, i), false))
        .collect::<Vec<_>>();

    let off_color = MATCH_EXAMPLE.first;
    let off_hue = Hue::from_index(off_color.color).map(|h| h.to_string());
    let own_hue = Hue::from_index(off_color.symbol).map(|h| h.to_string());

    let mut lines = vec![
        Line::from(format!(
            "The game consists of {PALETTE_SIZE} figures, each with a unique shape and color:"
        )),
        Line::from(palette),
        Line::from(""),
        Line::from(
            "Each round, you will be presented with 2 figures based on the shapes and colors above:",
        ),
        round_line(MATCH_EXAMPLE),
        Line::from(format!(
            "In this example, the first figure is {}, but it should have been {}.",
            off_hue.unwrap_or_default(),
            own_hue.unwrap_or_default()
        )),
        Line::from(format!(
            "The second figure is a {}, which matches the original in the list above,",
            name(MATCH_EXAMPLE.second)
        )),
        Line::from("so this figure should be selected."),
        Line::from(""),
        Line::from("Note: Both figures will never have their correct color in the same round."),
        Line::from(""),
        Line::from("There is also a case where neither figure has the correct color:"),
        round_line(ABSENT_EXAMPLE),
        Line::from("In that case, you must select the figure that is not represented"),
        Line::from("in shape or color by the two shown figures."),
        Line::from(""),
    ];

    if let Answer::Absent(index) = answer(&ABSENT_EXAMPLE, PALETTE_SIZE) {
        let mut spans = vec![Span::raw("That would be: ")];
        spans.extend(figure_spans(Figure::new(index, index), false));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(format!(
        "The game lasts {} seconds. Try to get as many points as possible before time runs out!",
        duration.as_secs()
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any character to return",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

impl Widget for HelpScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = help_lines(self.duration);
        let target = centered(area, &lines);
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false })
            .render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| &*s.content).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn explains_both_round_kinds_with_real_answers() {
        let help = text(&help_lines(Duration::from_secs(30)));
        assert!(help.contains("the first figure is yellow, but it should have been red"));
        assert!(help.contains("The second figure is a blue square"));
        assert!(help.contains("That would be:   ★"));
        assert!(help.contains("The game lasts 30 seconds"));
    }

    #[test]
    fn examples_are_what_the_text_says() {
        assert_eq!(answer(&MATCH_EXAMPLE, PALETTE_SIZE), Answer::Matching(3));
        assert_eq!(answer(&ABSENT_EXAMPLE, PALETTE_SIZE), Answer::Absent(4));
    }

    #[test]
    fn renders_into_a_small_terminal_without_panicking() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        HelpScreen {
            duration: Duration::from_secs(30),
        }
        .render(area, &mut buf);
    }
}
