mod path;

pub use path::FieldPath;

use crate::error::{Document, Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Location of the runtime wasm blob inside a chain spec
pub fn runtime_code_path() -> FieldPath {
    FieldPath::from_dotted("genesis.runtime.system.code")
}

/// Copies the value at `path` from `source` into the same place in `destination`.
///
/// Both documents must already contain the path. `destination` is only
/// modified when the copy succeeds.
pub fn copy_field(source: &Value, destination: &mut Value, path: &FieldPath) -> Result<()> {
    let value = path.lookup(source).ok_or_else(|| Error::MissingField {
        document: Document::Source,
        path: path.clone(),
    })?;

    let slot = path
        .lookup_mut(destination)
        .ok_or_else(|| Error::MissingField {
            document: Document::Destination,
            path: path.clone(),
        })?;

    *slot = value.clone();
    Ok(())
}

/// Reads a JSON file and deserializes it into `T`
pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            Error::Read {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            Error::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Overwrites `path` with `value` serialized as JSON with 2-space indentation
pub fn write_json_file_pretty<T, P>(path: P, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    // Serialize fully before touching the file.
    let serialized = serde_json::to_vec_pretty(value).map_err(Error::Serialize)?;

    let write = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write)?;
    file.write_all(&serialized).map_err(write)?;
    file.flush().map_err(write)
}

/// Copies the value at `field` from the JSON file at `source_path` into the
/// JSON file at `destination_path`, rewriting the destination in place.
pub fn copy_field_between_files<S, D>(
    source_path: S,
    destination_path: D,
    field: &FieldPath,
) -> Result<()>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let destination_path = destination_path.as_ref();

    let source: Value = read_json_file(source_path)?;
    let mut destination: Value = read_json_file(destination_path)?;

    copy_field(&source, &mut destination, field)?;
    tracing::debug!(%field, destination = %destination_path.display(), "copied field");

    write_json_file_pretty(destination_path, &destination)
}

/// Copies `genesis.runtime.system.code` from one chain spec file into another
pub fn copy_runtime_code<S, D>(source_path: S, destination_path: D) -> Result<()>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    copy_field_between_files(source_path, destination_path, &runtime_code_path())
}
