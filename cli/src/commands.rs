use clap::Parser;
use ipfilter_common::config::{Config, TokenPolicy};

#[derive(Parser)]
#[command(name = "ipfilter")]
#[command(about = "Sorts IPv4 addresses read from stdin and prints a few filtered views.")]
#[command(version)]
pub struct CommandLine {
    /// Abort on the first octet that is not a base-10 integer instead of skipping the line
    #[arg(long)]
    pub strict: bool,

    /// Reduce log output on stderr (-q hides the summary, -qq also hides warnings)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Increase log output on stderr (-v shows skipped lines, -vv traces everything)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored log symbols
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let policy = if self.strict {
            TokenPolicy::Abort
        } else {
            TokenPolicy::Skip
        };

        Config {
            policy,
            quiet: self.quiet,
        }
    }
}
