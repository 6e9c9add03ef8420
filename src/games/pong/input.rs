use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError, TrySendError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key
{
    Char(char),
    Ctrl(char),
    Up,
    Down,
    Esc,
    Other,
}

impl Key
{
    fn from_event(key: KeyEvent) -> Self
    {
        match key.code {
            KeyCode::Char(ch) if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Ctrl(ch),
            KeyCode::Char(ch) => Key::Char(ch),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Esc => Key::Esc,
            _ => Key::Other,
        }
    }
}

/// Writing half of the single-slot key channel.
#[derive(Clone)]
pub struct KeyPublisher
{
    tx: Sender<Key>,
    // Second handle on the slot so a stale key can be evicted.
    evict: Receiver<Key>,
    resized: Arc<AtomicBool>,
}

impl KeyPublisher
{
    /// Stores `key`, replacing any key the game loop has not read yet.
    pub fn publish(&self, key: Key)
    {
        let mut pending = key;
        loop {
            match self.tx.try_send(pending) {
                Ok(()) | Err(TrySendError::Disconnected(_)) => return,
                Err(TrySendError::Full(rejected)) => {
                    let _ = self.evict.try_recv();
                    pending = rejected;
                }
            }
        }
    }

    pub fn request_redraw(&self)
    {
        self.resized.store(true, Ordering::Release);
    }
}

/// Reading half: never blocks.
pub struct LatestKey
{
    rx: Receiver<Key>,
    resized: Arc<AtomicBool>,
}

impl LatestKey
{
    pub fn read(&self) -> Option<Key>
    {
        match self.rx.try_recv() {
            Ok(key) => Some(key),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn take_resize(&self) -> bool
    {
        self.resized.swap(false, Ordering::AcqRel)
    }
}

pub fn latest_key_channel() -> (KeyPublisher, LatestKey)
{
    let (tx, rx) = bounded(1);
    let resized = Arc::new(AtomicBool::new(false));
    let publisher = KeyPublisher {
        tx,
        evict: rx.clone(),
        resized: Arc::clone(&resized),
    };
    (publisher, LatestKey { rx, resized })
}

/// Background thread turning terminal events into the latest-key slot.
pub struct InputReader
{
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl InputReader
{
    pub fn spawn(publisher: KeyPublisher) -> Result<Self, String>
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = Arc::clone(&shutdown);
        let handle = thread::Builder::new()
            .name("pong-input".to_string())
            .spawn(move || run_loop(&publisher, &shutdown_flag))
            .map_err(|err| format!("Failed to start input thread: {err}"))?;
        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }
}

impl Drop for InputReader
{
    fn drop(&mut self)
    {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_loop(publisher: &KeyPublisher, shutdown: &AtomicBool)
{
    while !shutdown.load(Ordering::Relaxed) {
        match event::poll(POLL_TIMEOUT) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                log::warn!("input poll failed: {err}");
                return;
            }
        }
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                log::warn!("input read failed: {err}");
                return;
            }
        };
        forward(publisher, event);
    }
}

fn forward(publisher: &KeyPublisher, event: Event)
{
    match event {
        Event::Resize(cols, rows) => {
            log::debug!("terminal resized to {cols}x{rows}");
            publisher.request_redraw();
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let key = Key::from_event(key);
            log::trace!("key {key:?}");
            publisher.publish(key);
        }
        _ => {}
    }
}
