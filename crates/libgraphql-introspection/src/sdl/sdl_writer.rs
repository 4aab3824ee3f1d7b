use crate::sdl::element_kind::IndentLevel;
use std::fmt::Write;

/// Appends indented, `\n`-terminated lines to a buffer and keeps track of the
/// blank line that separates top-level blocks.
pub(crate) struct SdlWriter<'buf> {
    buffer: &'buf mut String,
    has_blocks: bool,
    indent_size: usize,
}
impl<'buf> SdlWriter<'buf> {
    pub(crate) fn new(buffer: &'buf mut String, indent_size: usize) -> Self {
        Self {
            buffer,
            has_blocks: false,
            indent_size,
        }
    }

    /// Must be called right before the first line of every top-level block.
    /// Emits the separating blank line for every block but the first.
    pub(crate) fn begin_block(&mut self) {
        if self.has_blocks {
            self.buffer.push('\n');
        }
        self.has_blocks = true;
    }

    pub(crate) fn line(&mut self, indent: IndentLevel, text: std::fmt::Arguments<'_>) {
        let width = indent.depth() * self.indent_size;
        self.buffer.extend(std::iter::repeat_n(' ', width));
        // Writing into a `String` can't fail.
        let _ = self.buffer.write_fmt(text);
        self.buffer.push('\n');
    }
}
