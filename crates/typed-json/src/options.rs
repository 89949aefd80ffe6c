use json_text::DEFAULT_MAX_DEPTH;

/// How field errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Stop at the first violating field in schema order.
    #[default]
    FailFast,
    /// Check every field. One violation is returned as is; several come back
    /// as [`DecodeError::Multiple`](crate::DecodeError::Multiple).
    Accumulate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub errors: ErrorMode,
    /// Nesting limit handed to the JSON text decoder.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            errors: ErrorMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    pub fn accumulate() -> Self {
        Self {
            errors: ErrorMode::Accumulate,
            ..Self::default()
        }
    }
}
