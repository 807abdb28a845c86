use chakana_engine::GameSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize as _},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const CONTROLS: &[(&str, &str)] = &[
    ("↑↓←→", "select edge"),
    ("tab", "flip orientation"),
    ("enter", "claim edge"),
    ("click", "claim nearest edge"),
    ("r", "replay this pattern"),
    ("p", "deal a new pattern"),
    ("q", "quit"),
];

/// Scores, turn indicator, category values, and controls.
#[derive(Debug)]
pub(crate) struct StatusDisplay<'a> {
    session: &'a GameSession,
    player_colors: &'a [Color],
    pattern: &'a str,
    message: Option<&'a str>,
    block: Option<Block<'a>>,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(session: &'a GameSession, player_colors: &'a [Color]) -> Self {
        Self {
            session,
            player_colors,
            pattern: "",
            message: None,
            block: None,
        }
    }

    pub(crate) fn pattern(self, pattern: &'a str) -> Self {
        Self { pattern, ..self }
    }

    pub(crate) fn message(self, message: Option<&'a str>) -> Self {
        Self { message, ..self }
    }

    pub(crate) fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn player_lines(&self) -> Vec<Line<'static>> {
        let active = self.session.active_player();
        self.session
            .scores()
            .standings()
            .filter_map(|(player, score)| {
                let spec = self.session.player_spec(player).ok()?;
                let color = self
                    .player_colors
                    .get(player.index())
                    .copied()
                    .unwrap_or(Color::White);
                let marker = if player == active { "▶ " } else { "  " };
                let mut line = Line::from(vec![
                    Span::raw(marker.to_owned()),
                    Span::styled("■ ", Style::new().fg(color)),
                    Span::raw(format!("{:<10}", spec.name)),
                    Span::raw(format!("{score:>4}")),
                ]);
                if player == active {
                    line = line.bold();
                }
                Some(line)
            })
            .collect()
    }

    fn value_lines(&self) -> Vec<Line<'static>> {
        self.session
            .palette()
            .categories()
            .map(|(_, spec)| {
                let fill = Color::Rgb(spec.reference.0, spec.reference.1, spec.reference.2);
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled("■ ", Style::new().fg(fill)),
                    Span::raw(format!("{:<10}", spec.name)),
                    Span::raw(format!("{:>3} pt", spec.points)),
                ])
            })
            .collect()
    }

    fn standing_line(&self) -> Line<'static> {
        let scores = self.session.scores();
        let best = scores.standings().map(|(_, score)| score).max().unwrap_or(0);
        let leaders: Vec<String> = scores
            .standings()
            .filter(|&(_, score)| score == best)
            .filter_map(|(player, _)| {
                self.session
                    .player_spec(player)
                    .ok()
                    .map(|spec| spec.name.clone())
            })
            .collect();
        if leaders.len() == 1 {
            Line::from(format!("Board complete: {} wins the round", leaders[0])).bold()
        } else {
            Line::from("Board complete: round tied").bold()
        }
    }
}

impl Widget for StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatusDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        lines.push(Line::from(format!("Pattern: {}", self.pattern)));
        lines.push(Line::default());
        lines.extend(self.player_lines());
        lines.push(Line::default());
        lines.extend(self.value_lines());
        lines.push(Line::default());

        if self.session.is_complete() {
            lines.push(self.standing_line());
            lines.push(Line::default());
        }
        if let Some(message) = self.message {
            lines.push(Line::from(message.to_owned()).yellow());
            lines.push(Line::default());
        }

        for (key, help) in CONTROLS {
            lines.push(Line::from(format!("{key:>6}  {help}")).dim());
        }

        let paragraph = Paragraph::new(lines);
        match &self.block {
            Some(block) => paragraph.block(block.clone()).render(area, buf),
            None => paragraph.render(area, buf),
        }
    }
}
