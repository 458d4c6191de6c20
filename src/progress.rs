// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of records wanted.
    fn begin(&mut self, _target: usize) {}

    /// A listing page (zero-based) is about to be fetched.
    fn page(&mut self, _page_index: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A record was appended; `collected` is the new total.
    fn item_done(&mut self, _id: &str, _collected: usize) {}

    /// A listed product was left out (DLC, or no usable id).
    fn item_skipped(&mut self, _id: &str) {}

    /// A listing page has been fully processed.
    fn page_done(&mut self, _page_index: u32, _collected: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _collected: usize) {}
}

/// A no-op progress sink, for callers that want the hooks type but no output.
pub struct NullProgress;
impl Progress for NullProgress {}
