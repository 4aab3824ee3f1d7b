use clap::CommandFactory;
use crate::commands;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(clap::Parser, Debug)]
#[command(
    about = "Render GraphQL introspection results as SDL.",
    after_help = "Logs go to stderr. Set `LOG_LEVEL` to one of `error`, `warn`, \
                  `info`, `debug`, or `trace` to change how much is logged.",
    name = "graphql-sdl",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output (same as `LOG_LEVEL=debug`).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Picks the logging level. `--verbose` wins over the `LOG_LEVEL` value.
    ///
    /// An unrecognized `LOG_LEVEL` falls back to the default level and comes
    /// back with a warning to log once logging is up.
    pub(crate) fn log_level(
        &self,
        log_level_env: Option<&str>,
    ) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }

        let Some(raw) = log_level_env.map(str::trim) else {
            return (DEFAULT_LOG_LEVEL, None);
        };
        let level = match raw.to_ascii_lowercase().as_str() {
            "debug" | "verbose" => tracing::Level::DEBUG,
            "error" => tracing::Level::ERROR,
            "info" => tracing::Level::INFO,
            "trace" => tracing::Level::TRACE,
            "warn" => tracing::Level::WARN,
            _ => return (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `LOG_LEVEL` environment variable value: `{raw}`")),
            ),
        };
        (level, None)
    }

    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
