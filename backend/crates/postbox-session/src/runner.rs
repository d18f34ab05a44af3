use crate::{
    Effect, Event, InputAction, Renderer, Result as SessionErrorResult, Session, SessionDriver,
    SessionError, Ticker,
};

use tokio::sync::mpsc;

/// Event loop for one connection.
///
/// Processes exactly one input or tick at a time and renders after each.
pub struct SessionRunner<T, R> {
    driver: SessionDriver,
    ticker: T,
    renderer: R,
}

enum Flow {
    Continue,
    Stop,
}

impl<T: Ticker, R: Renderer> SessionRunner<T, R> {
    pub fn new(driver: SessionDriver, ticker: T, renderer: R) -> Self {
        Self {
            driver,
            ticker,
            renderer,
        }
    }

    /// Run until the session quits or the transport closes its input.
    ///
    /// Returns the final session state. A renderer failure ends the run.
    pub async fn run(
        mut self,
        session: Session,
        mut input: mpsc::Receiver<InputAction>,
    ) -> SessionErrorResult<Session> {
        log::info!("Session runner started for {}", session.identity());

        // Prime the unread badge before the first frame
        let (mut session, flow) = self.step(session, InputAction::Tick).await?;
        if let Flow::Stop = flow {
            return Ok(session);
        }

        loop {
            let action = tokio::select! {
                action = input.recv() => match action {
                    Some(action) => action,
                    None => {
                        log::info!("Input closed for {}", session.identity());
                        break;
                    }
                },
                _ = self.ticker.tick() => InputAction::Tick,
            };

            let (next, flow) = self.step(session, action).await?;
            session = next;
            if let Flow::Stop = flow {
                log::info!("Session {} quit", session.identity());
                break;
            }
        }

        Ok(session)
    }

    async fn step(
        &mut self,
        session: Session,
        action: InputAction,
    ) -> SessionErrorResult<(Session, Flow)> {
        let (session, effects) = self.driver.dispatch(session, Event::Input(action)).await;

        let mut flow = Flow::Continue;
        for effect in effects {
            match effect {
                Effect::CopyToClipboard(text) => {
                    // Clipboard support is best effort on the client side
                    if let Err(e) = self.renderer.set_clipboard(&text) {
                        log::warn!("Clipboard copy failed for {}: {}", session.identity(), e);
                    }
                }
                Effect::Quit => flow = Flow::Stop,
                Effect::Request(request) => {
                    log::error!("Unsettled request reached the runner: {:?}", request);
                }
            }
        }

        if let Flow::Continue = flow {
            self.renderer.render(&session).map_err(SessionError::render)?;
        }

        Ok((session, flow))
    }
}
