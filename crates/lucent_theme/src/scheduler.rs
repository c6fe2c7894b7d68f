//! Background evaluation loop
//!
//! Re-runs the pipeline on a fixed interval and on host events (scheme
//! changes, viewport changes, theme switches). The loop owns its engine on
//! a dedicated thread; the returned [`SchedulerHandle`] is the only way to
//! reach it. Dropping the handle shuts the loop down and joins the thread.

use crate::apply::StyleSink;
use crate::context::ColorScheme;
use crate::engine::ThemeEngine;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Events the loop reacts to between interval ticks
#[derive(Clone, Debug)]
pub enum SchedulerEvent {
    /// System color scheme flipped (media-query change on the host)
    SystemSchemeChanged(ColorScheme),
    ReducedMotionChanged(bool),
    ThemeChanged(String),
    ViewportChanged(f32),
    /// Re-evaluate immediately without changing any input
    EvaluateNow,
    Shutdown,
}

/// Owner handle for a running scheduler thread
pub struct SchedulerHandle {
    tx: Sender<SchedulerEvent>,
    join: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Feed an event into the loop. Silently ignored after shutdown.
    pub fn notify(&self, event: SchedulerEvent) {
        let _ = self.tx.send(event);
    }

    /// Stop the loop and join the thread
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(join) = self.join.take() {
            let _ = self.tx.send(SchedulerEvent::Shutdown);
            let _ = join.join();
        }
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start the evaluation loop on a background thread.
///
/// Runs one pass immediately (the mount pass), then re-enters on every
/// interval tick and host event until shutdown. A pass whose fade is still
/// in flight is settled before the next receive, so applied state always
/// reflects the most recently completed transition.
pub fn spawn<S>(mut engine: ThemeEngine<S>) -> SchedulerHandle
where
    S: StyleSink + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<SchedulerEvent>();
    let interval = Duration::from_secs(engine.config().interval_secs.max(1));

    let join = thread::spawn(move || {
        tracing::debug!(?interval, "theme scheduler started");
        engine.evaluate(Instant::now());
        settle(&mut engine);

        let mut next_tick = Instant::now() + interval;
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            match rx.recv_timeout(timeout) {
                Ok(SchedulerEvent::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                    tracing::debug!("theme scheduler stopped");
                    break;
                }
                Ok(event) => {
                    handle_event(&mut engine, event);
                    engine.evaluate(Instant::now());
                }
                Err(RecvTimeoutError::Timeout) => {
                    next_tick = Instant::now() + interval;
                    engine.evaluate(Instant::now());
                }
            }
            settle(&mut engine);
        }
    });

    SchedulerHandle {
        tx,
        join: Some(join),
    }
}

fn handle_event<S: StyleSink>(engine: &mut ThemeEngine<S>, event: SchedulerEvent) {
    tracing::debug!(?event, "theme scheduler event");
    match event {
        SchedulerEvent::SystemSchemeChanged(scheme) => engine.force_scheme(Some(scheme)),
        SchedulerEvent::ReducedMotionChanged(reduced) => engine.set_reduced_motion(reduced),
        SchedulerEvent::ThemeChanged(name) => engine.set_theme(name),
        SchedulerEvent::ViewportChanged(width) => engine.set_viewport_width(width),
        SchedulerEvent::EvaluateNow => {}
        // Handled by the loop before we get here
        SchedulerEvent::Shutdown => {}
    }
}

/// Drive an in-flight fade to completion before the next receive
fn settle<S: StyleSink>(engine: &mut ThemeEngine<S>) {
    while let Some(deadline) = engine.applier().fade_deadline() {
        let now = Instant::now();
        if now < deadline {
            thread::sleep(deadline - now);
        }
        engine.tick(Instant::now());
    }
}
