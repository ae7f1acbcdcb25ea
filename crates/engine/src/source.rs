use crate::error::{EngineError, Result};
use crate::parser::RecordParser;
use crate::stats::Tally;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn reader<R: Read>(input: R, has_headers: bool) -> csv::Reader<R> {
    // 列数チェックはパーサ側で行うため flexible にする
    ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(input)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read every row of the CSV file at `path`, already split into fields.
///
/// # Errors
///
/// `FileRead` when the file cannot be opened or read, `Csv` when a row cannot
/// be decoded.
pub fn read_records(path: &Path, has_headers: bool) -> Result<Vec<Vec<String>>> {
    let mut rdr = reader(open(path)?, has_headers);
    rdr.records()
        .map(|row| {
            row.map(|record| record.iter().map(str::to_string).collect::<Vec<_>>())
                .map_err(|e| read_error(path, e))
        })
        .collect()
}

/// Stream the CSV file at `path` straight into a [`RecordParser`].
///
/// Rows are fed in file order without collecting the whole file first.
///
/// # Errors
///
/// Same as [`read_records`].
pub fn tally_file(path: &Path, has_headers: bool, target_app_id: &str) -> Result<Tally> {
    let mut rdr = reader(open(path)?, has_headers);
    let mut record = StringRecord::new();
    let mut parser = RecordParser::new(target_app_id);

    while rdr
        .read_record(&mut record)
        .map_err(|e| read_error(path, e))?
    {
        let fields: Vec<&str> = record.iter().collect();
        let _ = parser.push(&fields);
    }

    Ok(parser.finish())
}

/// I/O failures while reading stay `FileRead`; only decoding failures are `Csv`.
fn read_error(path: &Path, source: csv::Error) -> EngineError {
    let path = path.to_path_buf();
    if !source.is_io_error() {
        return EngineError::Csv { path, source };
    }
    match source.into_kind() {
        csv::ErrorKind::Io(source) => EngineError::FileRead { path, source },
        kind => EngineError::FileRead {
            path,
            source: std::io::Error::other(format!("{kind:?}")),
        },
    }
}
