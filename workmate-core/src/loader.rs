//! CSV input loading
//!
//! Every file is a header row followed by data rows. Files are read fully,
//! one after another, and their records concatenated in the order given.

use crate::config::InputConfig;
use crate::types::{Origin, Record};
use crate::{WorkmateError, WorkmateResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reader settings shared by every input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl LoadOptions {
    pub fn from_config(config: &InputConfig) -> WorkmateResult<Self> {
        Ok(Self {
            delimiter: config.delimiter_byte()?,
        })
    }
}

/// Load and concatenate records from all `paths`, in order
pub fn load_files<P: AsRef<Path>>(paths: &[P], options: &LoadOptions) -> WorkmateResult<Vec<Record>> {
    let mut records = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let loaded = load_file(path, options)?;
        debug!("Loaded {} records from {}", loaded.len(), path.display());
        records.extend(loaded);
    }
    debug!("Loaded {} records from {} files", records.len(), paths.len());
    Ok(records)
}

/// Load records from a single file; the handle is closed on return
pub fn load_file(path: &Path, options: &LoadOptions) -> WorkmateResult<Vec<Record>> {
    let file = File::open(path).map_err(|source| WorkmateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file, path, options)
}

/// Parse CSV from any reader. `source` labels errors and record origins.
pub fn read_records<R: Read>(
    mut reader: R,
    source: &Path,
    options: &LoadOptions,
) -> WorkmateResult<Vec<Record>> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|err| WorkmateError::Io {
            path: source.to_path_buf(),
            source: err,
        })?;

    let csv_error = |err: csv::Error| WorkmateError::Csv {
        path: source.to_path_buf(),
        source: err,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(buffer.as_slice());

    let headers = csv_reader.headers().map_err(csv_error)?.clone();

    let mut lines = LineCounter::new(&buffer);
    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(csv_error)?;
        // Short rows lack trailing fields; extra cells past the header are dropped
        let mut record: Record = headers.iter().zip(row.iter()).collect();
        if let Some(position) = row.position() {
            record = record.with_origin(Origin {
                path: source.to_path_buf(),
                line: lines.line_at(position.byte() as usize),
            });
        }
        records.push(record);
    }

    Ok(records)
}

/// Maps byte offsets of record starts to 1-based physical line numbers.
///
/// The reader reports the offset where it resumed scanning, which can sit
/// on the `\n` of a CRLF terminator or on skipped blank lines; those bytes
/// are stepped over before counting. Offsets must be non-decreasing.
struct LineCounter<'a> {
    buffer: &'a [u8],
    offset: usize,
    line: u64,
}

impl<'a> LineCounter<'a> {
    fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            offset: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, byte: usize) -> u64 {
        let mut start = byte.min(self.buffer.len());
        while matches!(self.buffer.get(start), Some(b'\r' | b'\n')) {
            start += 1;
        }
        if start > self.offset {
            let newlines = self.buffer[self.offset..start]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.line += newlines as u64;
            self.offset = start;
        }
        self.line
    }
}
