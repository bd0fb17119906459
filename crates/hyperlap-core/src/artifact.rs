//! Node-list artifacts: a JSON array of hyperedges, each an array of
//! integer node labels. Written by the clique export and read back as a
//! hypergraph.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::{ExportError, HyperlapResult};

/// Write `lists` to `path`, replacing any existing file.
pub fn write_node_lists(path: &Path, lists: &[Vec<u64>]) -> HyperlapResult<()> {
    let file = File::create(path).map_err(|e| write_error(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, lists)?;
    writer.flush().map_err(|e| write_error(path, e))?;
    Ok(())
}

/// Read the node lists stored at `path`, in file order.
pub fn read_node_lists(path: &Path) -> HyperlapResult<Vec<Vec<u64>>> {
    let file = File::open(path).map_err(|e| ExportError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_error(path: &Path, e: std::io::Error) -> ExportError {
    ExportError::Write {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
