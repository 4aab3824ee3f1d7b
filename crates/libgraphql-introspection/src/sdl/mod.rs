//! Rendering of the introspection [model](crate::model) as SDL text, or as a
//! `graphql_parser` schema document.

mod ast_converter;
mod buffer_pool;
mod directive_renderer;
mod document;
mod element_kind;
pub mod literal;
mod print_options;
mod sdl_printer;
mod sdl_render_error;
mod sdl_writer;

pub use ast_converter::SchemaDocument;
pub use ast_converter::to_document;
pub use document::print_schema;
pub use document::print_schema_with_options;
pub use print_options::compare_directives_by_name;
pub use print_options::compare_names_ignore_case;
pub use print_options::compare_types_by_name;
pub use print_options::DirectiveComparator;
pub use print_options::PrintOptions;
pub use print_options::TypeComparator;
pub use sdl_printer::SdlPrinter;
pub use sdl_render_error::SdlRenderError;

#[cfg(test)]
mod tests;
