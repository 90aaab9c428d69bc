use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReflexError {
    #[error("No input provided")]
    MissingArgument,
    #[error("Unable to serialize result. {error}")]
    Serialize {
        #[from]
        error: serde_json::Error,
    },
    #[error("Unable to write output. {error}")]
    Io {
        #[from]
        error: std::io::Error,
    },
}

impl ReflexError {
    /// Every failure exits with status 1; 0 is reserved for an emitted result.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
