/// Configuration for one collapse run
#[derive(Debug, Clone)]
pub struct UniqConfig {
    /// Whitespace-delimited fields to skip before comparing lines
    pub skip_fields: usize,
    /// Characters to skip after any skipped fields
    pub skip_chars: usize,
    /// Precede each output line with its occurrence count
    pub count: bool,
    /// Only output lines that were repeated
    pub repeated_only: bool,
    /// Only output lines that were not repeated
    pub unique_only: bool,
    pub debug: bool,
    pub buffer_size: usize,
    pub max_line_length: usize,
}

impl Default for UniqConfig {
    fn default() -> Self {
        UniqConfig {
            skip_fields: 0,
            skip_chars: 0,
            count: false,
            repeated_only: false,
            unique_only: false,
            debug: false,
            buffer_size: 65536,       // 64KB
            max_line_length: 1048576, // 1MB
        }
    }
}
