use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_introspection::IntrospectionQueryVariant;

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub(crate) enum QueryVariantArg {
    #[default]
    Classic,
    ClassicDraft,
    Modern,
    ModernDraft,
}
impl std::convert::From<QueryVariantArg> for IntrospectionQueryVariant {
    fn from(value: QueryVariantArg) -> Self {
        match value {
            QueryVariantArg::Classic => Self::Classic,
            QueryVariantArg::ClassicDraft => Self::ClassicDraft,
            QueryVariantArg::Modern => Self::Modern,
            QueryVariantArg::ModernDraft => Self::ModernDraft,
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectionQueryCmd {
    #[arg(
        default_value_t,
        help="Which introspection query to print. The `modern` variants also \
             request applied directives; the `draft` variants also request \
             deprecated arguments and input fields.",
        long,
        value_enum,
    )]
    variant: QueryVariantArg,
}

#[inherent::inherent]
impl RunnableCommand for IntrospectionQueryCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let variant = IntrospectionQueryVariant::from(self.variant);
        log::debug!("Printing the {variant:?} introspection query.");
        CommandResult::stdout(format_args!(
            "{}",
            variant.query_text().trim_end(),
        ))
    }
}
