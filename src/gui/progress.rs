// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    failed: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, failed: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status("Saving…");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn step_done(&mut self, name: &str) {
        self.done += 1;
        self.set_status(format!("{} ({}/{})", name, self.done, self.total));
    }
    fn step_failed(&mut self, name: &str, err: &str) {
        self.failed += 1;
        self.set_status(format!("{} failed: {}", name, err));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.set_status(s!("Saved")); // message box has the details
        }
    }
}
