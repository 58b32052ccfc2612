use std::io;
use std::process::ExitCode;

use anyhow::Context;

use mkversion::build_info;
use mkversion::util::log::log_init;
use mkversion::util::logging::standards::events;
use mkversion::{ConfigLoader, VersionHeader};

fn main() -> ExitCode {
    log_init(&ConfigLoader::logging_from_env());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    tracing::debug!(build = %build_info::summary());

    let config = ConfigLoader::from_args(std::env::args_os())?;

    // Nothing reaches stdout until every source has been read.
    let header = VersionHeader::collect(&config).inspect_err(|err| {
        tracing::debug!(
            event = events::SOURCE_FAILED,
            path = ?err.path(),
            error = %err
        );
    })?;

    header
        .write_to(io::stdout().lock())
        .inspect_err(|err| tracing::debug!(event = events::HEADER_WRITE_FAILED, error = %err))
        .context("failed to write header to stdout")?;

    Ok(())
}
