//! File-backed sources: integers and lines read from a file
//!
//! The file is opened on the first `resolve` and closed as soon as the source
//! reaches end-of-stream or fails, whichever comes first.
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use super::core::{Handler, Resolution, Stream};
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::FileConfig;

enum FileState {
    Unopened(PathBuf),
    Open(Lines<BufReader<File>>),
    Closed,
}

/// Lazily opened line reader shared by the file sources.
struct LineReader {
    state: FileState,
    config: FileConfig,
    line: usize,
}

impl LineReader {
    fn new(path: PathBuf, config: FileConfig) -> Self {
        LineReader { state: FileState::Unopened(path), config, line: 0 }
    }

    fn closed() -> Self {
        LineReader { state: FileState::Closed, config: FileConfig::default(), line: 0 }
    }

    /// Next line, `Ok(None)` at end of file. The file is closed on `Ok(None)` and on error.
    fn next_line(&mut self) -> StreamResult<Option<String>> {
        if let FileState::Unopened(path) = &self.state {
            match File::open(path) {
                Ok(file) => {
                    log::debug!("opened {}", path.display());
                    let reader = BufReader::with_capacity(self.config.buffer_size.max(1), file);
                    self.state = FileState::Open(reader.lines());
                }
                Err(err) => {
                    log::warn!("failed to open {}: {}", path.display(), err);
                    self.close();
                    return Err(err.into());
                }
            }
        }

        let FileState::Open(lines) = &mut self.state else {
            return Ok(None);
        };
        match lines.next() {
            Some(Ok(line)) => {
                self.line += 1;
                Ok(Some(line))
            }
            Some(Err(err)) => {
                log::warn!("read failed after line {}: {}", self.line, err);
                self.close();
                Err(err.into())
            }
            None => {
                log::debug!("reached end of file after {} lines", self.line);
                self.close();
                Ok(None)
            }
        }
    }

    fn close(&mut self) {
        self.state = FileState::Closed;
    }
}

// ================================
// FileLines
// ================================

/// Every line of a file, without its terminator.
pub struct FileLines {
    reader: LineReader,
}

impl FileLines {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_config(path, FileConfig::default())
    }

    pub fn with_config(path: impl AsRef<Path>, config: FileConfig) -> Self {
        FileLines { reader: LineReader::new(path.as_ref().to_path_buf(), config) }
    }
}

impl Default for FileLines {
    fn default() -> Self {
        FileLines { reader: LineReader::closed() }
    }
}

impl Stream for FileLines {
    type Item = String;

    fn resolve(&mut self, handler: &mut Handler<'_, String>) -> Resolution {
        match self.reader.next_line() {
            Ok(Some(line)) => {
                let resolution = Resolution::from_handled(handler(line));
                if resolution.is_end_of_stream() {
                    self.reader.close();
                }
                resolution
            }
            Ok(None) => Resolution::Exhausted,
            Err(err) => Resolution::Failed(err),
        }
    }
}

// ================================
// FileInts
// ================================

/// Whitespace-separated integers read from a file.
pub struct FileInts {
    reader: LineReader,
    tokens: VecDeque<String>,
}

impl FileInts {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_config(path, FileConfig::default())
    }

    pub fn with_config(path: impl AsRef<Path>, config: FileConfig) -> Self {
        FileInts {
            reader: LineReader::new(path.as_ref().to_path_buf(), config),
            tokens: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> StreamResult<Option<String>> {
        while self.tokens.is_empty() {
            match self.reader.next_line()? {
                Some(line) => self.tokens.extend(line.split_whitespace().map(str::to_owned)),
                None => return Ok(None),
            }
        }
        Ok(self.tokens.pop_front())
    }

    fn fail(&mut self, err: StreamError) -> Resolution {
        self.reader.close();
        self.tokens.clear();
        Resolution::Failed(err)
    }
}

impl Default for FileInts {
    fn default() -> Self {
        FileInts { reader: LineReader::closed(), tokens: VecDeque::new() }
    }
}

impl Stream for FileInts {
    type Item = i64;

    fn resolve(&mut self, handler: &mut Handler<'_, i64>) -> Resolution {
        let token = match self.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => return Resolution::Exhausted,
            Err(err) => return self.fail(err),
        };
        let value = match token.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                let line = self.reader.line;
                log::warn!("malformed integer {:?} on line {}", token, line);
                return self.fail(StreamError::Parse { line, token });
            }
        };
        match handler(value) {
            Ok(()) => Resolution::Progress,
            Err(err) => self.fail(err),
        }
    }
}
