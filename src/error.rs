use thiserror::Error;

/// Top-level error type for the tessella shatter kernel.
#[derive(Debug, Error)]
pub enum TessellaError {
    #[error(transparent)]
    Shatter(#[from] ShatterError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

/// Errors raised by the polygon-shatter engine.
///
/// All of these are recoverable: the driver returns them as values and the
/// caller is expected to leave the uncut region in place.
#[derive(Debug, Error)]
pub enum ShatterError {
    /// The glass polygon cannot bound a region (fewer than 3 vertices).
    ///
    /// A degenerate *shard* is not an error; the driver treats it as a no-op
    /// and returns the glass unchanged.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Neither candidate path around a seed edge passed the winding test,
    /// or face selection stopped making progress. Indicates a malformed or
    /// self-intersecting input pair.
    #[error("ambiguous face selection: {0}")]
    IntersectionAmbiguous(String),

    /// A boundary trace exhausted its step budget without closing a loop,
    /// or ran out of candidate neighbors.
    #[error("boundary trace diverged after {steps} steps: {detail}")]
    TraceDivergence { steps: usize, detail: String },

    /// A candidate closed path degenerates to a line or point, leaving no
    /// valid interior probe for the winding test.
    #[error("no interior sample point exists: {0}")]
    NoInteriorSample(String),
}

/// Errors raised by the workspace collaborator.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("segment not found: {0}")]
    SegmentNotFound(String),
}

/// Convenience type alias for results using [`TessellaError`].
pub type Result<T> = std::result::Result<T, TessellaError>;
