use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use hxd::{DumpConfig, dump_file};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    about = "Windowed hex dump with an optional ASCII panel",
    disable_help_flag = true
)]
struct Args {
    /// File to dump (same as -f)
    path: Option<PathBuf>,

    /// File to dump
    #[arg(short = 'f', value_name = "FILE")]
    file: Option<PathBuf>,

    /// Bytes shown per row
    #[arg(
        short = 'b',
        value_name = "N",
        default_value_t = 16,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    bytes: u64,

    /// Show the ASCII panel
    #[arg(short = 'a', value_name = "on|off", default_value = "on")]
    ascii: Panel,

    /// First byte of the file to display
    #[arg(short = 'o', value_name = "N", default_value_t = 0)]
    offset: u64,

    /// Number of bytes to display (0 = to end of file)
    #[arg(short = 'l', value_name = "N", default_value_t = 0)]
    limit: u64,

    /// Print usage
    #[arg(short = 'h', long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Panel {
    On,
    Off,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // -h prints usage but still exits non-zero
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            err.print()?;
            std::process::exit(2);
        }
        Err(err) => err.exit(),
    };

    let config = config_from(args)?;
    let stdout = io::stdout();
    dump_file(&config, &mut stdout.lock())?;
    Ok(())
}

fn config_from(args: Args) -> anyhow::Result<DumpConfig> {
    // -f wins over the positional form when both are given.
    let file_path = args
        .file
        .or(args.path)
        .context("no file name given (use -f <path> or a positional argument)")?;

    Ok(DumpConfig {
        file_path,
        chunk_size: args.bytes as usize,
        show_ascii: args.ascii == Panel::On,
        offset: args.offset,
        limit: args.limit,
    })
}
