/// Diagnostics port. The core never talks to a logging backend directly;
/// the host wires an adapter in.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
