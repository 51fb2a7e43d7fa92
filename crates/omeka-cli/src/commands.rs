use anyhow::Result;
use omeka_cli::config::{Overrides, Settings};
use omeka_cli::pipeline::{inspect_record, run_build};
use omeka_cli::types::BuildResult;

use crate::cli::{BuildArgs, InspectArgs};
use crate::summary::print_record;

pub fn run_build_command(args: &BuildArgs) -> Result<BuildResult> {
    let overrides = Overrides {
        metadata_dir: args.metadata_dir.clone(),
        output: args.output.clone(),
        item_type: args.item_type.clone(),
        date_uploaded: args.date_uploaded.clone(),
    };
    let settings = Settings::load(args.config.as_deref(), overrides)?;
    run_build(&settings, args.dry_run)
}

pub fn run_inspect_command(args: &InspectArgs) -> Result<()> {
    let settings = Settings::load(args.config.as_deref(), Overrides::default())?;
    let mapped = inspect_record(&args.file)?;
    print_record(&args.file, &mapped, &settings.row);
    Ok(())
}
