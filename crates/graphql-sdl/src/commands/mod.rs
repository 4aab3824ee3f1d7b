mod introspection_query;
mod print;

use crate::Cli;
use crate::CommandResult;
use introspection_query::IntrospectionQueryCmd;
use print::PrintCmd;

/// A `graphql-sdl` subcommand. Implementations run to completion and report
/// everything they have to say through the returned [`CommandResult`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-sdl")]
pub(crate) enum CommandEnum {
    /// Print the text of an introspection query.
    IntrospectionQuery(IntrospectionQueryCmd),

    /// Render introspection JSON responses as SDL.
    Print(Box<PrintCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        log::debug!("Running {self:?}.");
        match self {
            Self::IntrospectionQuery(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
        }
    }
}
