//! Report destinations: stdout or a file

use crate::error::{InspectError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination of a rendered report
pub trait OutputWriter {
    fn write(&self, content: &str) -> Result<()>;
}

/// Write `content` and flush
fn write_flushed<W: Write>(mut out: W, content: &str) -> io::Result<()> {
    out.write_all(content.as_bytes())?;
    out.flush()
}

/// Standard output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        write_flushed(io::stdout().lock(), content).map_err(|source| InspectError::StdoutWrite { source })
    }
}

/// A report file, replaced on every write
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn output_error(&self, source: io::Error) -> InspectError {
        InspectError::OutputWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        // The directory is never created on the user's behalf
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(InspectError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }

        let file = File::create(&self.path).map_err(|source| self.output_error(source))?;
        write_flushed(BufWriter::new(file), content).map_err(|source| self.output_error(source))
    }
}

/// Writer for `--output-file`, or stdout when none is given
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
