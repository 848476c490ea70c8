mod commands;
mod terminal;

use std::io::{self, BufWriter};

use anyhow::Context;
use commands::CommandLine;
use ipfilter_common::pipeline;
use terminal::logging;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    logging::init_logging(commands.verbose);

    let cfg = commands.to_config();
    debug!("Reading addresses from stdin ({:?} policy)", cfg.policy);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    pipeline::run(stdin, stdout, &cfg).context("failed to filter addresses from stdin")?;

    Ok(())
}
