//! Background thread running the look-ahead loop.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::runtime::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverMsg {
    /// The session changed; run a pass now.
    Wake,
    Shutdown,
}

/// Runs `Session::fill` every poll interval while music is scheduled and
/// sleeps on its channel while idle.
pub struct LookaheadDriver {
    tx: Sender<DriverMsg>,
    handle: Option<JoinHandle<()>>,
}

impl LookaheadDriver {
    pub fn spawn(session: Arc<Mutex<Session>>, poll_interval: Duration) -> std::io::Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let handle = thread::Builder::new()
            .name("lookahead".into())
            .spawn(move || run(session, rx, poll_interval))?;

        Ok(Self {
            tx,
            handle: Some(handle),
        })
    }

    pub fn wake(&self) {
        let _ = self.tx.send(DriverMsg::Wake);
    }

    pub fn shutdown(&mut self) {
        let _ = self.tx.send(DriverMsg::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("look-ahead thread panicked");
            }
        }
    }
}

impl Drop for LookaheadDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(session: Arc<Mutex<Session>>, rx: Receiver<DriverMsg>, poll_interval: Duration) {
    debug!(?poll_interval, "look-ahead driver started");

    loop {
        let scheduling = {
            let mut session = session.lock();
            session.fill();
            session.is_scheduling()
        };

        let message = if scheduling {
            match rx.recv_timeout(poll_interval) {
                Ok(message) => Some(message),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match rx.recv() {
                Ok(message) => Some(message),
                Err(_) => break,
            }
        };

        if message == Some(DriverMsg::Shutdown) {
            break;
        }
    }

    debug!("look-ahead driver stopped");
}
