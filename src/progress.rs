// src/progress.rs
/// Step reporting for multi-step operations (save pipeline, cache busting,
/// preview start-up). Frontends (GUI/CLI) implement this to surface status.
pub trait Progress {
    /// Called at the start with the number of steps (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one named step completes.
    fn step_done(&mut self, _name: &str) {}

    /// Called when one named step fails; the operation may continue.
    fn step_failed(&mut self, _name: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Collects every line; handy for tests and the CLI summary.
#[derive(Default, Debug)]
pub struct LineProgress {
    pub lines: Vec<String>,
}

impl Progress for LineProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn step_done(&mut self, name: &str) {
        self.lines.push(format!("✅ {name}"));
    }
    fn step_failed(&mut self, name: &str, err: &str) {
        self.lines.push(format!("⚠️ {name}: {err}"));
    }
}
