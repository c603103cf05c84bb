use anyhow::Result;
use tracing::info_span;

use erc_cli::config::RunConfig;
use erc_cli::pipeline::{RunResult, run};

use crate::cli::{ConvertArgs, MappingArgs};
use crate::summary::print_mapping;

pub fn run_convert(args: &ConvertArgs) -> Result<RunResult> {
    let config = RunConfig::load_or_default(args.config.as_deref())?
        .with_overrides(args.input.clone(), args.output.clone());
    let span = info_span!("convert", input = %config.input_file.display(), dry_run = args.dry_run);
    let _guard = span.enter();
    Ok(run(&config, args.dry_run)?)
}

pub fn run_mapping(args: &MappingArgs) -> Result<()> {
    let config = RunConfig::load_or_default(args.config.as_deref())?;
    print_mapping(&config.header_mapping);
    Ok(())
}
