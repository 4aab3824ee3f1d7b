use crate::model::AppliedDirective;
use crate::model::AppliedDirectiveArgument;
use crate::model::HasDirectives;
use crate::sdl::literal;
use crate::sdl::SdlPrinter;

impl SdlPrinter<'_> {
    /// Renders the directives of `element` as a string of ` @name(args)`
    /// tokens, each preceded by a space (or an empty string).
    ///
    /// An `appliedDirectives` list, when the server reported one, is
    /// authoritative and printed as-is (`@deprecated` is expected to be in
    /// it). Otherwise a `@deprecated` directive is synthesized from the
    /// element's legacy `isDeprecated`/`deprecationReason` fields.
    pub fn render_directives<T: HasDirectives + ?Sized>(&self, element: &T) -> String {
        if !self.options.print_directives {
            return String::new();
        }

        if let Some(applied_directives) = element.applied_directives() {
            return applied_directives.iter()
                .map(|applied| self.render_applied_directive(applied))
                .collect();
        }

        match element.deprecation() {
            Some(deprecation) if deprecation.is_deprecated => {
                match deprecation.deprecation_reason.as_deref() {
                    Some(reason) => format!(
                        " @deprecated(reason: {})",
                        literal::quote_string(reason),
                    ),
                    None => " @deprecated".to_string(),
                }
            },
            _ => String::new(),
        }
    }

    fn render_applied_directive(&self, applied: &AppliedDirective) -> String {
        match applied.args.as_deref() {
            Some(args) if !args.is_empty() => format!(
                " @{}({})",
                applied.name,
                args.iter()
                    .map(|arg| format!(
                        "{}: {}",
                        arg.name,
                        self.render_applied_argument_value(applied, arg),
                    ))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => format!(" @{}", applied.name),
        }
    }

    fn render_applied_argument_value(
        &self,
        applied: &AppliedDirective,
        arg: &AppliedDirectiveArgument,
    ) -> String {
        match arg.value.as_deref() {
            None => "null".to_string(),
            Some(raw) if self.options.raw_directive_argument_values =>
                literal::coerce_argument_value(
                    self.schema,
                    &applied.name,
                    &arg.name,
                    raw,
                ),
            Some(literal) => literal.to_string(),
        }
    }
}
