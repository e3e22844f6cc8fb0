use std::process::ExitCode;
use sunburst_devtools::{DESTINATION_SPEC_PATH, SOURCE_SPEC_PATH, copy_runtime_code, logging};

fn main() -> ExitCode {
    logging::init();

    match copy_runtime_code(SOURCE_SPEC_PATH, DESTINATION_SPEC_PATH) {
        Ok(()) => {
            tracing::info!(
                "Copied runtime code from {SOURCE_SPEC_PATH} into {DESTINATION_SPEC_PATH}"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
