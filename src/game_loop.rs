use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use crate::input::{InputEvent, InputSource};
use crate::render::Renderer;
use crate::session::Session;

/// Wall-clock length of one input/update/render round.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Exit,
}

/// Runs a session at a fixed tick rate. The snake itself only steps when the
/// level's speed interval has elapsed since its last step.
pub struct GameLoop<I, R> {
    input: I,
    renderer: R,
    last_advance: Instant,
}

impl<I: InputSource, R: Renderer> GameLoop<I, R> {
    pub fn new(input: I, renderer: R, started: Instant) -> Self {
        GameLoop { input, renderer, last_advance: started }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Ticks until the player exits. After a game over the final frame keeps
    /// being shown.
    pub fn run(&mut self, session: &mut Session) -> Result<()> {
        loop {
            let tick_start = Instant::now();

            if self.tick(session, tick_start)? == TickFlow::Exit {
                info!(score = session.state().score(), "player quit");
                return Ok(());
            }

            sleep(TICK_INTERVAL.saturating_sub(tick_start.elapsed()));
        }
    }

    pub fn tick(&mut self, session: &mut Session, now: Instant) -> Result<TickFlow> {
        while let Some(event) = self.input.poll_event()? {
            match event {
                InputEvent::Exit => return Ok(TickFlow::Exit),
                InputEvent::Move(direction) => session.steer(direction),
            }
        }

        let interval = session.state().current_speed_interval();
        if !session.state().is_game_over() && now.saturating_duration_since(self.last_advance) >= interval {
            self.last_advance = now;
            session.advance()?;
        }

        self.renderer.render_frame(session.board(), session.snake(), session.state())?;
        Ok(TickFlow::Continue)
    }
}
