//! Development helpers for the Sunburst chain.
//!
//! - [`copy_runtime_code`] propagates `genesis.runtime.system.code` from a
//!   freshly built chain spec into the checked-in one.
//! - [`mock`] is an HTTP stand-in for the oracle endpoint the offchain worker
//!   polls, always answering with the byte `0x2a`.

mod document;
pub mod error;
pub mod logging;
pub mod mock;

pub use document::{
    FieldPath, copy_field, copy_field_between_files, copy_runtime_code, read_json_file,
    runtime_code_path, write_json_file_pretty,
};
pub use error::{Document, Error, Result};

/// Chain spec the runtime code is taken from
pub const SOURCE_SPEC_PATH: &str = "./tmp_dev.json";

/// Chain spec that is rewritten with the new runtime code
pub const DESTINATION_SPEC_PATH: &str = "./sunburst.json";
