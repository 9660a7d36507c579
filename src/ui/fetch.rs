//! Lifecycle of a remote read backing a screen.

/// A value that arrives over the network.
///
/// Screens render a skeleton while `Loading` and fall back to a single
/// folded error line on `Failed`; the structured error only reaches the
/// log.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fetch<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight; render the skeleton.
    Loading,
    /// Response arrived.
    Ready(T),
    /// Folded failure message for display.
    Failed(String),
}

impl<T> Fetch<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Fetch::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Fetch::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Failed(message) => Some(message),
            _ => None,
        }
    }
}
