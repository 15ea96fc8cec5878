use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{LoadError, VoieRecord};

/// Read a dataset from disk, gunzipping `*.gz` paths.
pub fn read_records(path: &Path) -> Result<Vec<VoieRecord>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    // Buffer fully so gzip failures surface as Io rather than Parse.
    let mut body = Vec::new();
    BufReader::new(reader)
        .read_to_end(&mut body)
        .map_err(io_err)?;

    Ok(serde_json::from_slice(&body)?)
}
