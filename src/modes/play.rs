use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::game::{GameConfig, GameEngine, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Interactive terminal session: keyboard in, ticks on a timer, board out
pub struct PlayMode<R> {
    engine: GameEngine<R>,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl<R: Rng> PlayMode<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            engine: GameEngine::with_rng(config, rng),
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            tick_ms = self.engine.config().tick_interval_ms,
            start = %self.engine.config().start,
            "session started"
        );

        // Timers live inside the loop and are dropped on every exit path.
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        info!(
            runs = self.stats.runs_finished,
            best = self.stats.best_score,
            "session ended"
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut render_timer = interval(self.engine.config().render_interval());
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    let outcome = self.engine.tick().context("Simulation invariant violated")?;
                    self.on_tick(outcome);
                }

                _ = render_timer.tick() => {
                    self.stats.update();
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                if !self.engine.set_direction(direction) {
                    debug!(?direction, "input ignored after game over");
                }
            }
            KeyAction::Restart => {
                if self.engine.is_failed() {
                    self.restart();
                } else {
                    debug!("restart ignored while running");
                }
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn on_tick(&mut self, outcome: TickOutcome) {
        if outcome.ended_run() {
            info!(score = self.engine.score(), "game over");
            self.stats.on_run_over(self.engine.score());
        }
    }

    /// Only reachable from game over, after `on_tick` has recorded the score.
    fn restart(&mut self) {
        let final_score = self.engine.reset();
        self.stats.on_run_start();
        info!(final_score, "restarted");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
