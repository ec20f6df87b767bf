use std::{
    io::{self, Write},
    path::Path,
    sync::atomic::{AtomicBool, Ordering},
};

use ordstats_ports::progress::ProgressSink;

/// Prints a dot to stderr for every file read and every progress tick.
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    dirty: AtomicBool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn dot(&self) {
        let mut err = io::stderr().lock();
        let _ = err.write_all(b".");
        let _ = err.flush();
        self.dirty.store(true, Ordering::Relaxed);
    }
}

impl ProgressSink for ConsoleProgress {
    fn on_file(&self, _path: &Path) {
        self.dot();
    }

    fn on_tick(&self) {
        self.dot();
    }

    fn on_complete(&self) {
        // Only terminate a line that was actually started.
        if self.dirty.swap(false, Ordering::Relaxed) {
            let _ = writeln!(io::stderr().lock());
        }
    }
}

/// Discards all progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_file(&self, _path: &Path) {}
    fn on_tick(&self) {}
    fn on_complete(&self) {}
}
