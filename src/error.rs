#[derive(Debug, thiserror::Error)]
pub enum UniqError {
    #[error("too many operands")]
    TooManyOperands,

    #[error("output clobbers input, bailing")]
    OutputClobbersInput,

    #[error("failed to open input file '{path}': {source}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open output file '{path}': {source}")]
    OpenOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line too long: {length} > {max_length}")]
    LineTooLong { length: usize, max_length: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
