use crate::model::AppliedDirective;
use crate::model::Deprecation;
use crate::model::Directive;
use crate::model::DirectiveLocation;
use crate::model::EnumValue;
use crate::model::InputValue;
use crate::model::RootOperationTypeRef;
use crate::model::Schema;
use crate::model::Type;
use crate::model::TypeKind;
use crate::model::TypeRef;
use crate::sdl::print_schema;
use crate::sdl::print_schema_with_options;
use crate::sdl::DirectiveComparator;
use crate::sdl::PrintOptions;
use crate::sdl::SdlPrinter;
use crate::sdl::SdlRenderError;
use crate::sdl::TypeComparator;
use crate::sdl::tests::test_utils::deprecated_arg;
use crate::sdl::tests::test_utils::enum_type;
use crate::sdl::tests::test_utils::field;
use crate::sdl::tests::test_utils::object_ref;
use crate::sdl::tests::test_utils::object_type;
use crate::sdl::tests::test_utils::person_schema;
use crate::sdl::tests::test_utils::scalar_ref;
use crate::sdl::tests::test_utils::schema_with_types;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SdlRenderError>;

mod types {
    use super::*;

    #[test]
    fn object_with_query_root() -> Result<()> {
        assert_eq!(print_schema(&person_schema())?, concat!(
            "schema {\n",
            "  query: Person\n",
            "}\n",
            "\n",
            "type Person {\n",
            "  Age: Int!\n",
            "  Name: String\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn union_without_members_is_a_bare_header() -> Result<()> {
        let schema = schema_with_types(None, vec![
            Type::new(TypeKind::Union, "Reason"),
        ]);

        assert_eq!(print_schema(&schema)?, "union Reason\n");
        Ok(())
    }

    #[test]
    fn union_members_precede_directives() -> Result<()> {
        let schema = schema_with_types(None, vec![
            Type {
                applied_directives: Some(vec![AppliedDirective::new("cached")]),
                possible_types: Some(vec![object_ref("Person"), object_ref("Post")]),
                ..Type::new(TypeKind::Union, "SearchResult")
            },
        ]);

        assert_eq!(
            print_schema(&schema)?,
            "union SearchResult = Person | Post @cached\n",
        );
        Ok(())
    }

    #[test]
    fn interfaces_and_implements_clause() -> Result<()> {
        let interface_names = ["IPerson3", "IPerson1", "IPerson2"];
        let mut types: Vec<Type> =
            interface_names.iter()
                .map(|name| Type::new(TypeKind::Interface, *name))
                .collect();
        types.push(Type {
            interfaces: Some(vec![
                TypeRef::named(TypeKind::Interface, "IPerson1"),
                TypeRef::named(TypeKind::Interface, "IPerson2"),
                TypeRef::named(TypeKind::Interface, "IPerson3"),
            ]),
            ..Type::new(TypeKind::Object, "Person")
        });
        let schema = schema_with_types(Some("Person"), types);

        assert_eq!(print_schema(&schema)?, concat!(
            "schema {\n",
            "  query: Person\n",
            "}\n",
            "\n",
            "interface IPerson1\n",
            "\n",
            "interface IPerson2\n",
            "\n",
            "interface IPerson3\n",
            "\n",
            "type Person implements IPerson1 & IPerson2 & IPerson3\n",
        ));
        Ok(())
    }

    #[test]
    fn interface_implementing_interface() -> Result<()> {
        let schema = schema_with_types(None, vec![
            Type {
                fields: Some(vec![field("id", TypeRef::non_null(scalar_ref("ID")))]),
                interfaces: Some(vec![TypeRef::named(TypeKind::Interface, "Node")]),
                ..Type::new(TypeKind::Interface, "Resource")
            },
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "interface Resource implements Node {\n",
            "  id: ID!\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn enum_values_keep_their_order() -> Result<()> {
        let schema = schema_with_types(None, vec![
            enum_type("Color", vec![
                EnumValue::new("RED"),
                EnumValue {
                    deprecation: Deprecation::deprecated(Some("Use RED")),
                    ..EnumValue::new("CRIMSON")
                },
                EnumValue::new("BLUE"),
            ]),
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "enum Color {\n",
            "  RED\n",
            "  CRIMSON @deprecated(reason: \"Use RED\")\n",
            "  BLUE\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn input_object_with_default_values() -> Result<()> {
        let schema = schema_with_types(None, vec![
            Type {
                input_fields: Some(vec![
                    InputValue {
                        default_value: Some("10".to_string()),
                        ..InputValue::new("limit", scalar_ref("Int"))
                    },
                    InputValue {
                        default_value: Some("\"a\\\"b\"".to_string()),
                        ..InputValue::new("name", scalar_ref("String"))
                    },
                    InputValue::new("tags", TypeRef::list(TypeRef::non_null(scalar_ref("String")))),
                ]),
                ..Type::new(TypeKind::InputObject, "PersonFilter")
            },
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "input PersonFilter {\n",
            "  limit: Int = 10\n",
            "  name: String = \"a\\\"b\"\n",
            "  tags: [String!]\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn custom_scalar_with_directive() -> Result<()> {
        let schema = schema_with_types(None, vec![
            Type {
                applied_directives: Some(vec![
                    AppliedDirective::new("specifiedBy")
                        .with_arg("url", "\"https://example.com/date\""),
                ]),
                ..Type::new(TypeKind::Scalar, "Date")
            },
        ]);

        assert_eq!(
            print_schema(&schema)?,
            "scalar Date @specifiedBy(url: \"https://example.com/date\")\n",
        );
        Ok(())
    }

    #[test]
    fn builtin_scalars_when_not_omitted() -> Result<()> {
        let schema = schema_with_types(None, vec![]);
        let options = PrintOptions {
            omit_builtin_scalars: false,
            ..Default::default()
        };

        assert_eq!(print_schema_with_options(&schema, &options)?, concat!(
            "scalar Boolean\n",
            "\n",
            "scalar Float\n",
            "\n",
            "scalar ID\n",
            "\n",
            "scalar Int\n",
            "\n",
            "scalar String\n",
        ));
        Ok(())
    }

    #[test]
    fn introspection_types_are_skipped() -> Result<()> {
        let schema = schema_with_types(None, vec![
            object_type("__Type", vec![field("name", scalar_ref("String"))]),
            Type::new(TypeKind::Enum, "__TypeKind"),
            Type::new(TypeKind::Scalar, "Date"),
        ]);

        assert_eq!(print_schema(&schema)?, "scalar Date\n");
        Ok(())
    }

    #[test]
    fn render_single_type() -> Result<()> {
        let schema = person_schema();
        let options = PrintOptions::default();
        let printer = SdlPrinter::new(&schema, &options);
        let person = schema.type_by_name("Person").unwrap();

        assert_eq!(printer.render_type(person)?, concat!(
            "type Person {\n",
            "  Age: Int!\n",
            "  Name: String\n",
            "}\n",
        ));

        let string = schema.type_by_name("String").unwrap();
        assert_eq!(printer.render_type(string)?, "");
        Ok(())
    }
}

mod fields {
    use super::*;

    #[test]
    fn plain_arguments_stay_on_one_line() -> Result<()> {
        let schema = schema_with_types(Some("Query"), vec![
            object_type("Query", vec![
                crate::model::Field {
                    args: Some(vec![
                        InputValue {
                            default_value: Some("10".to_string()),
                            ..InputValue::new("first", scalar_ref("Int"))
                        },
                        InputValue::new("after", scalar_ref("String")),
                    ]),
                    ..field(
                        "persons",
                        TypeRef::non_null(TypeRef::list(TypeRef::non_null(object_ref("Person")))),
                    )
                },
            ]),
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "schema {\n",
            "  query: Query\n",
            "}\n",
            "\n",
            "type Query {\n",
            "  persons(first: Int = 10, after: String): [Person!]!\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn deprecations() -> Result<()> {
        let schema = schema_with_types(Some("Query"), vec![
            object_type("Query", vec![
                crate::model::Field {
                    args: Some(vec![
                        deprecated_arg("filter", object_ref("PersonFilter"), "Do not use this arg"),
                    ]),
                    ..field("persons", TypeRef::list(object_ref("Person")))
                },
            ]),
            object_type("Person", vec![
                field("name", scalar_ref("String")),
                crate::model::Field {
                    deprecation: Deprecation::deprecated(None),
                    ..field("nickname", scalar_ref("String"))
                },
            ]),
            Type {
                input_fields: Some(vec![
                    deprecated_arg("age", scalar_ref("Int"), "Use birthday"),
                ]),
                ..Type::new(TypeKind::InputObject, "PersonFilter")
            },
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "schema {\n",
            "  query: Query\n",
            "}\n",
            "\n",
            "type Person {\n",
            "  name: String\n",
            "  nickname: String @deprecated\n",
            "}\n",
            "\n",
            "input PersonFilter {\n",
            "  age: Int @deprecated(reason: \"Use birthday\")\n",
            "}\n",
            "\n",
            "type Query {\n",
            "  persons(\n",
            "    filter: PersonFilter @deprecated(reason: \"Do not use this arg\")\n",
            "  ): [Person]\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn described_arguments_go_multi_line() -> Result<()> {
        let schema = schema_with_types(None, vec![
            object_type("Query", vec![
                crate::model::Field {
                    applied_directives: Some(vec![AppliedDirective::new("live")]),
                    args: Some(vec![
                        InputValue {
                            description: Some("The person's id".to_string()),
                            ..InputValue::new("id", TypeRef::non_null(scalar_ref("ID")))
                        },
                        InputValue::new("locale", scalar_ref("String")),
                    ]),
                    description: Some("Look up a person".to_string()),
                    ..field("person", object_ref("Person"))
                },
            ]),
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "type Query {\n",
            "  # Look up a person\n",
            "  person(\n",
            "    # The person's id\n",
            "    id: ID!\n",
            "    locale: String\n",
            "  ): Person @live\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn empty_applied_directives_keep_arguments_plain() -> Result<()> {
        // The legacy deprecation is superseded by the (empty) applied list.
        let arg = InputValue {
            applied_directives: Some(vec![]),
            ..deprecated_arg("id", scalar_ref("ID"), "ignored")
        };
        let schema = schema_with_types(None, vec![
            object_type("Query", vec![
                crate::model::Field {
                    args: Some(vec![arg]),
                    ..field("node", object_ref("Node"))
                },
            ]),
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "type Query {\n",
            "  node(id: ID): Node\n",
            "}\n",
        ));
        Ok(())
    }
}

mod descriptions {
    use super::*;

    fn described_schema() -> Schema {
        Schema {
            description: Some("The schema".to_string()),
            ..schema_with_types(Some("Query"), vec![
                Type {
                    description: Some("Entry point\r\n\r\nSays \"hi\"".to_string()),
                    fields: Some(vec![
                        crate::model::Field {
                            description: Some("Greeting\twith tab".to_string()),
                            ..field("hello", scalar_ref("String"))
                        },
                    ]),
                    ..Type::new(TypeKind::Object, "Query")
                },
                enum_type("Mood", vec![
                    EnumValue {
                        description: Some("Cheerful".to_string()),
                        ..EnumValue::new("HAPPY")
                    },
                ]),
            ])
        }
    }

    #[test]
    fn descriptions_become_comments() -> Result<()> {
        assert_eq!(print_schema(&described_schema())?, concat!(
            "# The schema\n",
            "schema {\n",
            "  query: Query\n",
            "}\n",
            "\n",
            "enum Mood {\n",
            "  # Cheerful\n",
            "  HAPPY\n",
            "}\n",
            "\n",
            "# Entry point\n",
            "# Says \\\"hi\\\"\n",
            "type Query {\n",
            "  # Greeting\\twith tab\n",
            "  hello: String\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn per_category_switches() -> Result<()> {
        let options = PrintOptions {
            enum_value_descriptions: false,
            type_descriptions: false,
            ..Default::default()
        };

        assert_eq!(print_schema_with_options(&described_schema(), &options)?, concat!(
            "schema {\n",
            "  query: Query\n",
            "}\n",
            "\n",
            "enum Mood {\n",
            "  HAPPY\n",
            "}\n",
            "\n",
            "type Query {\n",
            "  # Greeting\\twith tab\n",
            "  hello: String\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn global_switch_overrides_categories() -> Result<()> {
        let options = PrintOptions::default().without_descriptions();
        let sdl = print_schema_with_options(&described_schema(), &options)?;

        assert!(!sdl.contains('#'), "unexpected comment in:\n{sdl}");
        Ok(())
    }
}

mod directives {
    use super::*;

    fn directive_schema(directives: Vec<Directive>) -> Schema {
        Schema {
            directives: Some(directives),
            ..Default::default()
        }
    }

    #[test]
    fn directive_without_arguments() -> Result<()> {
        let schema = directive_schema(vec![
            Directive::new("my", [DirectiveLocation::Query]),
        ]);

        assert_eq!(print_schema(&schema)?, "directive @my on\n  | QUERY\n");
        Ok(())
    }

    #[test]
    fn absent_or_empty_locations() -> Result<()> {
        let schema = directive_schema(vec![
            Directive {
                locations: None,
                name: "a".to_string(),
                ..Default::default()
            },
            Directive {
                locations: Some(vec![]),
                name: "b".to_string(),
                ..Default::default()
            },
        ]);

        assert_eq!(print_schema(&schema)?, "directive @a on\n\ndirective @b on\n");
        Ok(())
    }

    #[test]
    fn repeatable_directive_with_plain_arguments() -> Result<()> {
        let schema = directive_schema(vec![
            Directive {
                args: Some(vec![
                    InputValue {
                        default_value: Some("ADMIN".to_string()),
                        ..InputValue::new("requires", TypeRef::named(TypeKind::Enum, "Role"))
                    },
                ]),
                is_repeatable: true,
                ..Directive::new("auth", [
                    DirectiveLocation::Object,
                    DirectiveLocation::FieldDefinition,
                ])
            },
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "directive @auth(requires: Role = ADMIN) repeatable on\n",
            "  | OBJECT\n",
            "  | FIELD_DEFINITION\n",
        ));
        Ok(())
    }

    #[test]
    fn described_directive_arguments_go_multi_line() -> Result<()> {
        let schema = directive_schema(vec![
            Directive {
                args: Some(vec![
                    InputValue {
                        description: Some("Required role".to_string()),
                        ..InputValue::new("requires", TypeRef::named(TypeKind::Enum, "Role"))
                    },
                ]),
                description: Some("Access control".to_string()),
                ..Directive::new("auth", [DirectiveLocation::Object])
            },
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "# Access control\n",
            "directive @auth(\n",
            "  # Required role\n",
            "  requires: Role\n",
            ") on\n",
            "  | OBJECT\n",
        ));
        Ok(())
    }

    #[test]
    fn standard_directives_are_not_declared() -> Result<()> {
        let schema = directive_schema(vec![
            Directive::new("skip", [DirectiveLocation::Field]),
            Directive::new("include", [DirectiveLocation::Field]),
            Directive::new("deprecated", [DirectiveLocation::FieldDefinition]),
            Directive::new("live", [DirectiveLocation::Query]),
        ]);

        assert_eq!(print_schema(&schema)?, "directive @live on\n  | QUERY\n");

        let options = PrintOptions::default();
        let printer = SdlPrinter::new(&schema, &options);
        assert_eq!(printer.render_directive(schema.directive("skip").unwrap()), "");
        Ok(())
    }

    #[test]
    fn unknown_locations_are_printed_verbatim() -> Result<()> {
        let schema = directive_schema(vec![
            Directive::new("experimental", [DirectiveLocation::from("SOMEWHERE_NEW")]),
        ]);

        assert_eq!(
            print_schema(&schema)?,
            "directive @experimental on\n  | SOMEWHERE_NEW\n",
        );
        Ok(())
    }

    #[test]
    fn directives_precede_schema_and_types() -> Result<()> {
        let schema = Schema {
            directives: Some(vec![
                Directive::new("b", [DirectiveLocation::Object]),
                Directive::new("A", [DirectiveLocation::Object]),
            ]),
            ..person_schema()
        };

        assert_eq!(print_schema(&schema)?, concat!(
            "directive @A on\n",
            "  | OBJECT\n",
            "\n",
            "directive @b on\n",
            "  | OBJECT\n",
            "\n",
            "schema {\n",
            "  query: Person\n",
            "}\n",
            "\n",
            "type Person {\n",
            "  Age: Int!\n",
            "  Name: String\n",
            "}\n",
        ));
        Ok(())
    }
}

mod schema_definition {
    use super::*;

    #[test]
    fn all_root_operation_types() -> Result<()> {
        let schema = Schema {
            mutation_type: Some(RootOperationTypeRef::new("Mutation")),
            query_type: Some(RootOperationTypeRef::new("Query")),
            subscription_type: Some(RootOperationTypeRef::new("Subscription")),
            ..Default::default()
        };
        let options = PrintOptions::default();

        assert_eq!(SdlPrinter::new(&schema, &options).render_schema_definition(), concat!(
            "schema {\n",
            "  query: Query\n",
            "  mutation: Mutation\n",
            "  subscription: Subscription\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn default_root_names_are_not_inferred() -> Result<()> {
        let schema = schema_with_types(None, vec![
            object_type("Query", vec![field("hello", scalar_ref("String"))]),
        ]);

        assert_eq!(print_schema(&schema)?, concat!(
            "type Query {\n",
            "  hello: String\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn applied_directives_alone_produce_a_block() -> Result<()> {
        let schema = Schema {
            applied_directives: Some(vec![AppliedDirective::new("contact")]),
            ..Default::default()
        };

        assert_eq!(print_schema(&schema)?, "schema @contact {\n}\n");

        let options = PrintOptions::default().without_directives();
        assert_eq!(print_schema_with_options(&schema, &options)?, "");
        Ok(())
    }

    #[test]
    fn empty_schema_renders_nothing() -> Result<()> {
        assert_eq!(print_schema(&Schema::default())?, "");
        Ok(())
    }
}

mod options {
    use super::*;

    #[test]
    fn unsorted_keeps_schema_order() -> Result<()> {
        let schema = Schema {
            types: Some(vec![
                Type::new(TypeKind::Scalar, "Zeta"),
                Type::new(TypeKind::Scalar, "alpha"),
                Type::new(TypeKind::Scalar, "Beta"),
            ]),
            ..Default::default()
        };

        assert_eq!(print_schema(&schema)?, concat!(
            "scalar alpha\n",
            "\n",
            "scalar Beta\n",
            "\n",
            "scalar Zeta\n",
        ));

        let options = PrintOptions::default().unsorted();
        assert_eq!(print_schema_with_options(&schema, &options)?, concat!(
            "scalar Zeta\n",
            "\n",
            "scalar alpha\n",
            "\n",
            "scalar Beta\n",
        ));
        Ok(())
    }

    #[test]
    fn custom_type_order() -> Result<()> {
        let schema = Schema {
            types: Some(vec![
                Type::new(TypeKind::Scalar, "Short"),
                Type::new(TypeKind::Scalar, "Longest"),
                Type::new(TypeKind::Scalar, "Longer"),
            ]),
            ..Default::default()
        };
        let longest_first: TypeComparator = Arc::new(|a, b| b.name.len().cmp(&a.name.len()));
        let options = PrintOptions {
            type_order: Some(longest_first),
            ..Default::default()
        };

        assert_eq!(print_schema_with_options(&schema, &options)?, concat!(
            "scalar Longest\n",
            "\n",
            "scalar Longer\n",
            "\n",
            "scalar Short\n",
        ));
        Ok(())
    }

    #[test]
    fn comparators_can_capture_state() -> Result<()> {
        let schema = Schema {
            directives: Some(vec![
                Directive::new("alpha", [DirectiveLocation::Object]),
                Directive::new("omega", [DirectiveLocation::Object]),
            ]),
            types: Some(vec![
                Type::new(TypeKind::Scalar, "Apple"),
                Type::new(TypeKind::Scalar, "Mango"),
                Type::new(TypeKind::Scalar, "Zucchini"),
            ]),
            ..Default::default()
        };
        let priorities: HashMap<&'static str, u8> =
            HashMap::from([("Zucchini", 0), ("Apple", 1), ("omega", 0)]);
        let type_priorities = priorities.clone();
        let directive_order: DirectiveComparator = Arc::new(move |a, b| {
            let rank = |name: &str| priorities.get(name).copied().unwrap_or(u8::MAX);
            rank(a.name.as_str()).cmp(&rank(b.name.as_str()))
        });
        let type_order: TypeComparator = Arc::new(move |a, b| {
            let rank = |name: &str| type_priorities.get(name).copied().unwrap_or(u8::MAX);
            rank(a.name.as_str()).cmp(&rank(b.name.as_str()))
        });
        let options = PrintOptions {
            directive_order: Some(directive_order),
            type_order: Some(type_order),
            ..Default::default()
        };

        let sdl = print_schema_with_options(&schema, &options)?;
        assert_eq!(sdl, concat!(
            "directive @omega on\n",
            "  | OBJECT\n",
            "\n",
            "directive @alpha on\n",
            "  | OBJECT\n",
            "\n",
            "scalar Zucchini\n",
            "\n",
            "scalar Apple\n",
            "\n",
            "scalar Mango\n",
        ));

        // Cloned options share the same comparators.
        assert_eq!(print_schema_with_options(&schema, &options.clone())?, sdl);
        Ok(())
    }

    #[test]
    fn indent_size() -> Result<()> {
        let options = PrintOptions {
            indent_size: 4,
            ..Default::default()
        };

        assert_eq!(print_schema_with_options(&person_schema(), &options)?, concat!(
            "schema {\n",
            "    query: Person\n",
            "}\n",
            "\n",
            "type Person {\n",
            "    Age: Int!\n",
            "    Name: String\n",
            "}\n",
        ));
        Ok(())
    }

    #[test]
    fn without_directives_drops_deprecations() -> Result<()> {
        let schema = schema_with_types(None, vec![
            enum_type("Color", vec![
                EnumValue {
                    deprecation: Deprecation::deprecated(Some("Use RED")),
                    ..EnumValue::new("CRIMSON")
                },
            ]),
        ]);
        let options = PrintOptions::default().without_directives();

        assert_eq!(print_schema_with_options(&schema, &options)?, concat!(
            "enum Color {\n",
            "  CRIMSON\n",
            "}\n",
        ));
        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_type_kind_fails_with_raw_kind() {
        let schema = schema_with_types(None, vec![
            Type::new(TypeKind::from("12345"), "Weird"),
        ]);

        let err = print_schema(&schema).unwrap_err();
        assert_eq!(err, SdlRenderError::UnsupportedTypeKind {
            kind: "12345".to_string(),
            type_name: "Weird".to_string(),
        });
        assert_eq!(err.to_string(), "12345");
    }

    #[test]
    fn wrapper_kinds_are_not_top_level_types() {
        let schema = schema_with_types(None, vec![
            Type::new(TypeKind::NonNull, "Wrapped"),
        ]);

        assert_eq!(print_schema(&schema).unwrap_err().to_string(), "NON_NULL");
    }
}
