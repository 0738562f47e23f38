use crate::error::SwapError;

/// Reporting capability for recoverable conditions, injected so the loader
/// and engine can be exercised without capturing process-wide streams.
pub trait Diagnostics {
    fn report(&mut self, err: &SwapError);
}

/// Forwards reports to the active tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&mut self, err: &SwapError) {
        match err {
            SwapError::MalformedPair(_) | SwapError::PairFileEncoding(_) => {
                tracing::warn!("{}", err)
            }
            _ => tracing::error!("{}", err),
        }
    }
}

/// Collects rendered messages, mainly for tests.
impl Diagnostics for Vec<String> {
    fn report(&mut self, err: &SwapError) {
        self.push(err.to_string());
    }
}
