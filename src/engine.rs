// src/engine.rs
use std::io::{BufRead, ErrorKind, Write};
use std::time::{Duration, Instant};

use crate::config::UniqConfig;
use crate::error::UniqError;
use crate::key::comparison_key;

/// Runtime statistics for one `process_stream` call
#[derive(Debug, Default, Clone)]
pub struct UniqStats {
    pub lines_read: usize,
    pub lines_output: usize,
    pub lines_suppressed: usize,
    pub processing_time: Duration,
}

/// The run of consecutive key-equal lines currently buffered.
///
/// `content` is the *first* line of the run (later matches only bump
/// the count) with its terminator stripped; `terminated` records
/// whether that line originally ended in a newline, so the output can
/// reproduce it verbatim.
#[derive(Debug)]
struct Run {
    content: String,
    terminated: bool,
    count: u64,
}

impl Run {
    fn new(content: &str, terminated: bool) -> Self {
        Run {
            content: content.to_string(),
            terminated,
            count: 1,
        }
    }
}

/// Collapses consecutive duplicate lines from an input stream.
///
/// Holds at most one buffered run at a time, scoped to a single
/// `process_stream` call.
pub struct CollapseEngine {
    config: UniqConfig,
}

impl CollapseEngine {
    pub fn new(config: UniqConfig) -> Self {
        CollapseEngine { config }
    }

    /// Process one input stream top to bottom, writing collapsed output.
    ///
    /// Lines are compared with their terminators stripped, so an
    /// unterminated final line still matches an identical terminated
    /// one. A closed pipe on the output side ends processing early
    /// without an error.
    pub fn process_stream<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<UniqStats, UniqError> {
        let start_time = Instant::now();
        let mut stats = UniqStats::default();
        let mut current: Option<Run> = None;
        let mut raw = String::new();

        loop {
            raw.clear();
            if input.read_line(&mut raw)? == 0 {
                break;
            }
            stats.lines_read += 1;

            let terminated = raw.ends_with('\n');
            let content = if terminated {
                &raw[..raw.len() - 1]
            } else {
                raw.as_str()
            };

            if content.len() > self.config.max_line_length {
                return Err(UniqError::LineTooLong {
                    length: content.len(),
                    max_length: self.config.max_line_length,
                });
            }

            let is_duplicate = current
                .as_ref()
                .is_some_and(|run| self.keys_equal(&run.content, content));

            if is_duplicate {
                if let Some(run) = current.as_mut() {
                    run.count += 1;
                }
                continue;
            }

            if let Some(run) = current.take() {
                if let Err(e) = self.write_run(output, &run, &mut stats) {
                    if is_broken_pipe(&e) {
                        stats.processing_time = start_time.elapsed();
                        return Ok(stats);
                    }
                    return Err(e);
                }
            }
            current = Some(Run::new(content, terminated));
        }

        // end of input closes the final run, if any
        if let Some(run) = current.take() {
            if let Err(e) = self.write_run(output, &run, &mut stats) {
                if !is_broken_pipe(&e) {
                    return Err(e);
                }
            }
        }

        stats.processing_time = start_time.elapsed();
        Ok(stats)
    }

    fn keys_equal(&self, a: &str, b: &str) -> bool {
        comparison_key(a, self.config.skip_fields, self.config.skip_chars)
            == comparison_key(b, self.config.skip_fields, self.config.skip_chars)
    }

    /// Apply the repeated/unique filters and write one closed run.
    /// When both filters are active a run must pass both.
    fn write_run<W: Write>(
        &self,
        output: &mut W,
        run: &Run,
        stats: &mut UniqStats,
    ) -> Result<(), UniqError> {
        if self.config.repeated_only && run.count == 1 {
            stats.lines_suppressed += 1;
            return Ok(());
        }
        if self.config.unique_only && run.count != 1 {
            stats.lines_suppressed += 1;
            return Ok(());
        }

        if self.config.count {
            write!(output, "{} ", run.count)?;
        }
        output.write_all(run.content.as_bytes())?;
        if run.terminated {
            output.write_all(b"\n")?;
        }
        stats.lines_output += 1;
        Ok(())
    }
}

fn is_broken_pipe(err: &UniqError) -> bool {
    matches!(err, UniqError::IoError(e) if e.kind() == ErrorKind::BrokenPipe)
}
