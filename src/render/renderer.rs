use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GRID_SIZE, Position, Snapshot};
use crate::metrics::SessionStats;

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Food,
    Empty,
}

impl CellKind {
    pub fn of(snapshot: &Snapshot, pos: Position) -> Self {
        if snapshot.head() == Some(pos) {
            CellKind::Head
        } else if snapshot.snake.contains(&pos) {
            CellKind::Body
        } else if snapshot.food == Some(pos) {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            CellKind::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
            CellKind::Food => Span::styled(
                "● ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }
}

/// Draws a [`Snapshot`]; never touches the engine
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(self.stats(snapshot, stats), chunks[0]);

        // Two columns per cell plus the border.
        let board_width = (GRID_SIZE as u16) * 2 + 2;
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(board_width),
                Constraint::Min(0),
            ])
            .split(chunks[1])[1];

        if snapshot.failed {
            frame.render_widget(self.game_over(snapshot, stats), board_area);
        } else {
            frame.render_widget(self.grid(snapshot), board_area);
        }

        frame.render_widget(self.controls(), chunks[2]);
    }

    fn grid(&self, snapshot: &Snapshot) -> Paragraph<'static> {
        let lines: Vec<Line> = (0..GRID_SIZE)
            .map(|row| {
                let spans: Vec<Span> = (0..GRID_SIZE)
                    .map(|col| CellKind::of(snapshot, Position::new(row, col)).span())
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green))
                .title(" Snake "),
        )
    }

    fn stats(&self, snapshot: &Snapshot, stats: &SessionStats) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Steps: ", label),
            Span::styled(snapshot.steps.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(stats.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(stats.best_score.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn game_over(&self, snapshot: &Snapshot, stats: &SessionStats) -> Paragraph<'static> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if stats.new_best {
            text.push(Line::from(Span::styled(
                "New best!",
                Style::default().fg(Color::Green),
            )));
        }

        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to retry", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to retry | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn snapshot(failed: bool) -> Snapshot {
        Snapshot {
            snake: vec![Position::new(2, 2), Position::new(2, 3)],
            food: Some(Position::new(5, 5)),
            score: 4,
            steps: 20,
            failed,
        }
    }

    fn draw(snapshot: &Snapshot) -> String {
        draw_with(snapshot, &SessionStats::new())
    }

    fn draw_with(snapshot: &Snapshot, stats: &SessionStats) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 26)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, snapshot, stats))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cell_kinds() {
        let snap = snapshot(false);
        assert_eq!(CellKind::of(&snap, Position::new(2, 2)), CellKind::Head);
        assert_eq!(CellKind::of(&snap, Position::new(2, 3)), CellKind::Body);
        assert_eq!(CellKind::of(&snap, Position::new(5, 5)), CellKind::Food);
        assert_eq!(CellKind::of(&snap, Position::new(0, 0)), CellKind::Empty);
    }

    #[test]
    fn test_running_board_drawn() {
        let screen = draw(&snapshot(false));
        assert!(screen.contains("Snake"));
        assert!(screen.contains("■"));
        assert!(screen.contains("●"));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_header_shows_steps() {
        let screen = draw(&snapshot(false));
        assert!(screen.contains("Steps: 20"));
        assert!(screen.contains("Length: 2"));
    }

    #[test]
    fn test_zero_score_is_not_a_new_best() {
        let mut snap = snapshot(true);
        snap.score = 0;
        let mut stats = SessionStats::new();
        stats.on_run_over(0);

        let screen = draw_with(&snap, &stats);
        assert!(screen.contains("GAME OVER"));
        assert!(!screen.contains("New best!"));
    }

    #[test]
    fn test_beating_previous_best_is_announced() {
        let mut stats = SessionStats::new();
        stats.on_run_over(2);
        stats.on_run_start();
        stats.on_run_over(4);

        let screen = draw_with(&snapshot(true), &stats);
        assert!(screen.contains("New best!"));
    }

    #[test]
    fn test_game_over_shows_final_score() {
        let screen = draw(&snapshot(true));
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Final Score: 4"));
    }
}
