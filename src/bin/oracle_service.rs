use std::process::ExitCode;
use sunburst_devtools::{logging, mock};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let result = match mock::bind(mock::MOCK_PORT).await {
        Ok(listener) => mock::serve(listener).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
