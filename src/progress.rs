// src/progress.rs
/// Lightweight progress reporting for the scraper.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of districts to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One district fetched, with its mandal count.
    fn item_done(&mut self, _district: &str, _mandals: usize) {}

    /// One district failed and was skipped.
    fn item_failed(&mut self, _district: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints `[n/total]` lines to stderr.
#[derive(Default)]
pub struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, district: &str, mandals: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {district}: {mandals} mandals", self.done, self.total);
    }

    fn item_failed(&mut self, district: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {district}: FAILED ({reason})", self.done, self.total);
    }

    fn finish(&mut self) {
        eprintln!("Done: {}/{} districts", self.done, self.total);
    }
}
