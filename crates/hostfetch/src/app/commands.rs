use clap::Parser;

/// Command-line surface. Single shot, no subcommands: the report is the
/// whole program.
#[derive(Debug, Parser)]
#[command(name = "hostfetch", version)]
#[command(about = "Print a snapshot of this host's system information")]
pub struct Cli {
    /// Disable colored output (also respects NO_COLOR)
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_arguments() {
        let cli = Cli::try_parse_from(["hostfetch"]).expect("bare invocation parses");
        assert!(!cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_output_flags() {
        let cli = Cli::try_parse_from(["hostfetch", "--no-color", "--verbose"])
            .expect("flags parse");
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["hostfetch", "--format", "json"]).is_err());
    }
}
