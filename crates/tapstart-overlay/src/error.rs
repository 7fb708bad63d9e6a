use std::fmt;

/// Failures a host can report while providing a drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    NoWindow,
    NoDocument,
    CanvasNotFound(String),
    ContextUnavailable,
    Js(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::NoWindow => write!(f, "no global window exists"),
            HostError::NoDocument => write!(f, "window has no document"),
            HostError::CanvasNotFound(id) => write!(f, "canvas with id '{id}' not found"),
            HostError::ContextUnavailable => write!(f, "2d drawing context unavailable"),
            HostError::Js(message) => write!(f, "host call failed: {message}"),
        }
    }
}

impl std::error::Error for HostError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    Host(HostError),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::Host(err) => write!(f, "overlay surface unavailable: {err}"),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OverlayError::Host(err) => Some(err),
        }
    }
}

impl From<HostError> for OverlayError {
    fn from(err: HostError) -> Self {
        OverlayError::Host(err)
    }
}
