use crate::model::Directive;
use crate::model::Schema;
use crate::model::Type;
use crate::sdl::buffer_pool;
use crate::sdl::sdl_writer::SdlWriter;
use crate::sdl::PrintOptions;
use crate::sdl::SdlPrinter;
use crate::sdl::SdlRenderError;

type Result<T> = std::result::Result<T, SdlRenderError>;

/// Renders `schema` as SDL using the default [`PrintOptions`].
pub fn print_schema(schema: &Schema) -> Result<String> {
    print_schema_with_options(schema, &PrintOptions::default())
}

/// Renders `schema` as SDL using the given [`PrintOptions`].
pub fn print_schema_with_options(schema: &Schema, options: &PrintOptions) -> Result<String> {
    SdlPrinter::new(schema, options).print()
}

impl SdlPrinter<'_> {
    /// Renders the whole schema: directive declarations first, then the
    /// `schema` block, then every type. Blocks are separated by a single
    /// blank line. Types owned by introspection (`__Type`, etc) are skipped.
    ///
    /// Fails on the first top-level type whose kind can't be declared in SDL.
    pub fn print(&self) -> Result<String> {
        let mut buffer = buffer_pool::acquire();
        let mut out = SdlWriter::new(&mut buffer, self.options.indent_size);

        let directives = self.ordered_directives();
        log::debug!("Printing {} directive declarations.", directives.len());
        for directive in directives {
            self.write_directive(&mut out, directive);
        }

        self.write_schema_definition(&mut out);

        let types = self.ordered_types();
        log::debug!("Printing {} types.", types.len());
        for ty in types {
            self.write_type(&mut out, ty)?;
        }

        Ok(buffer.as_str().to_owned())
    }

    /// The schema's directive declarations, sorted by
    /// [`PrintOptions::directive_order`] when one is set.
    pub(crate) fn ordered_directives(&self) -> Vec<&Directive> {
        let mut directives: Vec<&Directive> =
            self.schema.directives.iter().flatten().collect();
        if let Some(compare) = &self.options.directive_order {
            directives.sort_by(|a, b| compare(*a, *b));
        }
        directives
    }

    /// The schema's non-introspection types, sorted by
    /// [`PrintOptions::type_order`] when one is set.
    pub(crate) fn ordered_types(&self) -> Vec<&Type> {
        let mut types: Vec<&Type> =
            self.schema.types.iter()
                .flatten()
                .filter(|ty| {
                    let skip = ty.is_introspection();
                    if skip {
                        log::trace!("Skipping introspection type `{}`.", ty.name);
                    }
                    !skip
                })
                .collect();
        if let Some(compare) = &self.options.type_order {
            types.sort_by(|a, b| compare(*a, *b));
        }
        types
    }
}
