// crates/ports/src/progress.rs
pub trait ProgressSink: Send + Sync {
    fn on_file(&self, path: &std::path::Path);
    fn on_tick(&self);
    fn on_complete(&self);
}
