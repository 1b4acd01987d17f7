// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users; the scraper logs
/// failures through `tracing` regardless.
pub trait Progress {
    /// Called once the party list is known.
    fn begin(&mut self, _parties: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A constituency row made it into the output.
    fn item_done(&mut self, _label: &str) {}

    /// A party or constituency was dropped.
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints one line per event to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, parties: usize) {
        println!("Parties data extracted successfully ({parties} parties).");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        println!("Added data for constituency: {label}");
    }
    fn item_failed(&mut self, label: &str) {
        self.failed += 1;
        println!("Skipped: {label}");
    }
    fn finish(&mut self) {
        println!("Data extraction complete: {} rows added, {} skipped.", self.done, self.failed);
    }
}
