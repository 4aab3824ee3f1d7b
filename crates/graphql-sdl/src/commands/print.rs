use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_introspection::sdl;
use libgraphql_introspection::sdl::PrintOptions;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        default_value_t=2,
        help="Number of spaces per indentation level.",
        long,
    )]
    indent_size: usize,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    json_file_exts: Vec<String>,

    #[arg(
        help="Also declare the built-in scalars (`String`, `Boolean`, `Int`, \
             `Float`, `ID`).",
        long,
    )]
    keep_builtin_scalars: bool,

    #[arg(
        help="Don't print descriptions as `#` comments.",
        long,
    )]
    no_descriptions: bool,

    #[arg(
        help="Don't print applied directives (including `@deprecated`).",
        long,
    )]
    no_directives: bool,

    #[arg(
        help="Write one `<name>.graphql` file per input into this directory \
             instead of printing to stdout.",
        long,
        value_name="DIR",
    )]
    out_dir: Option<PathBuf>,

    #[arg(
        help="Treat applied-directive argument values as raw values and \
             quote them according to the declared argument type.",
        long,
    )]
    raw_directive_argument_values: bool,

    #[arg(
        help="Keep directives and types in the order the introspection \
             response lists them.",
        long,
    )]
    unsorted: bool,

    #[arg(
        help="Paths to one or more introspection JSON files or directories \
             containing introspection JSON files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl PrintCmd {
    pub(crate) fn print_options(&self) -> PrintOptions {
        let mut options = PrintOptions {
            indent_size: self.indent_size,
            omit_builtin_scalars: !self.keep_builtin_scalars,
            raw_directive_argument_values: self.raw_directive_argument_values,
            ..Default::default()
        };
        if self.no_descriptions {
            options = options.without_descriptions();
        }
        if self.no_directives {
            options = options.without_directives();
        }
        if self.unsorted {
            options = options.unsorted();
        }
        options
    }

    /// Finds all JSON files recursively located at or under each path passed
    /// as an arg.
    pub(crate) fn find_json_files(&self, errors: &mut Vec<anyhow::Error>) -> Vec<PathBuf> {
        let json_file_exts: HashSet<&str> =
            self.json_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension().and_then(|ext| ext.to_str())
                            && json_file_exts.contains(ext) {
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        // A single file passed explicitly is rendered whatever its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to render {first_arg_path:#?} even though it \
                doesn't match any of the --json-file-exts ({}).",
                json_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths
    }
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let file_paths = self.find_json_files(&mut errors);
        log::debug!(
            "Found {} introspection JSON files to render.",
            file_paths.len(),
        );
        if file_paths.is_empty() && errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No introspection JSON files found.",
                output_utils::RED_X,
            ));
        }

        let options = self.print_options();
        let mut rendered: Vec<(PathBuf, String)> = vec![];
        for path in file_paths {
            match render_file(&path, &options) {
                Ok(sdl) => rendered.push((path, sdl)),
                Err(e) => errors.push(e),
            }
        }

        if let Some(out_dir) = &self.out_dir {
            match write_sdl_files(out_dir, &rendered) {
                Ok(()) if errors.is_empty() => {
                    return CommandResult::stdout(format_args!(
                        "{} Wrote {} SDL files to {out_dir:#?}.",
                        output_utils::GREEN_CHECK,
                        rendered.len(),
                    ));
                },
                Ok(()) => (),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return CommandResult::errors(
                format_args!("Errors rendering introspection results:"),
                &errors,
            );
        }

        let sdl =
            rendered.iter()
                .map(|(_, sdl)| sdl.as_str())
                .filter(|sdl| !sdl.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
        CommandResult::stdout(format_args!("{}", sdl.trim_end()))
    }
}

fn render_file(path: &Path, options: &PrintOptions) -> anyhow::Result<String> {
    log::debug!("Rendering {path:#?}...");
    let json =
        std::fs::read(path)
            .with_context(|| format!("Failed to read {path:#?}"))?;
    let schema =
        libgraphql_introspection::schema_from_json_slice(&json)
            .with_context(|| format!("Failed to load an introspection result from {path:#?}"))?;
    sdl::print_schema_with_options(&schema, options)
        .with_context(|| format!("Failed to render {path:#?} as SDL (unsupported type kind)"))
}

fn write_sdl_files(out_dir: &Path, rendered: &[(PathBuf, String)]) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {out_dir:#?}"))?;

    let mut written: HashSet<PathBuf> = HashSet::new();
    for (source_path, sdl) in rendered {
        let stem =
            source_path.file_stem()
                .map(|stem| stem.to_string_lossy())
                .unwrap_or_default();
        let out_path = out_dir.join(format!("{stem}.graphql"));
        if !written.insert(out_path.clone()) {
            log::warn!(
                "{out_path:#?} was already written for another input; \
                overwriting it with the SDL of {source_path:#?}.",
            );
        }
        std::fs::write(&out_path, sdl)
            .with_context(|| format!("Failed to write {out_path:#?}"))?;
        log::info!("Wrote {out_path:#?}.");
    }
    Ok(())
}
