use anyhow::Result;
use bmpv::{arguments::Arguments, bumper::VersionBumper};
use clap::{CommandFactory, Parser, error::ErrorKind};
use log::LevelFilter;

fn main() -> Result<()> {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            // Any other arity or flag mix falls back to the usage text
            Arguments::command().print_help()?;
            return Ok(());
        }
    };

    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .format_timestamp(None)
        .init();

    match args.part.as_deref() {
        None => {
            let version = VersionBumper::inspect(&args.file)?;
            println!("{} --> v{}", VersionBumper::file_label(&args.file), version);
        }
        Some(part) => {
            let version = VersionBumper::bump(&args.file, part)?;
            println!("{} bumped to version {}", args.file.display(), version);
        }
    }

    Ok(())
}
