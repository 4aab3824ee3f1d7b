use crate::sdl::PrintOptions;

/// Nesting depth of an emitted line, in units of
/// [`PrintOptions::indent_size`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum IndentLevel {
    /// Type, directive, and schema headers.
    Top,
    /// Fields, enum values, input fields, directive arguments, root types.
    Member,
    /// Arguments of a field printed in multi-line form.
    Nested,
}
impl IndentLevel {
    pub(crate) fn depth(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Member => 1,
            Self::Nested => 2,
        }
    }
}

/// The category of schema element a description belongs to. Decides both
/// where the description comment is indented and which option gates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ElementKind {
    Directive,
    DirectiveArgument,
    EnumValue,
    Field,
    FieldArgument,
    InputField,
    Schema,
    Type,
}
impl ElementKind {
    pub(crate) fn indent(self) -> IndentLevel {
        match self {
            Self::Directive | Self::Schema | Self::Type => IndentLevel::Top,
            Self::DirectiveArgument
                | Self::EnumValue
                | Self::Field
                | Self::InputField => IndentLevel::Member,
            Self::FieldArgument => IndentLevel::Nested,
        }
    }

    pub(crate) fn descriptions_enabled(self, options: &PrintOptions) -> bool {
        if !options.print_descriptions {
            return false;
        }
        match self {
            Self::Directive | Self::DirectiveArgument => options.directive_descriptions,
            Self::EnumValue => options.enum_value_descriptions,
            Self::Field | Self::InputField => options.field_descriptions,
            Self::FieldArgument => options.argument_descriptions,
            Self::Schema | Self::Type => options.type_descriptions,
        }
    }
}
