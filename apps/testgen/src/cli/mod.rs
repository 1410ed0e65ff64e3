//! CLI command handling for testgen

mod documents;

use anyhow::Context;
use clap::{Parser, Subcommand};
use documents::{
    ImplClass, MissingRequest, MissingResponse, NamesRequest, NamesResponse, TypeIdEntry,
    TypesRequest, TypesResponse, VarsResponse,
};
use std::path::PathBuf;
use testgen_config::{logging, AppConfig, TestgenError};
use testgen_naming::{
    skeleton_var_names, MethodNameGenerator, ReservedNames, TestClassIndex, TypeDescriptor,
    TypeIdGenerator,
};
use tracing::info;

/// Placeholder for an unnamed parameter in `testgen vars`
const UNNAMED_PARAM: &str = "_";

/// The main CLI struct.
#[derive(Parser)]
#[command(name = "testgen")]
#[command(about = "Collision-free test method names for generated test classes")]
#[command(version)]
pub struct Cli {
    /// Directory searched for testgen.toml (default: current directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Output format (pretty or compact)
    #[arg(long, global = true, default_value = "pretty", value_parser = ["pretty", "compact"])]
    pub format: String,

    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// The available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate test method names for a batch of methods
    ///
    /// Input: {"methods": [{"name": "add", "params": ["int"]}], "reserved": ["testFoo"]}
    Names {
        /// Read the batch from file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Additional reserved name (repeatable)
        #[arg(long = "reserved")]
        reserved: Vec<String>,
    },
    /// Generate short unique identifiers for parameter types
    ///
    /// Input: {"types": ["java.util.List<String>", "java.awt.List"]}
    Types {
        /// Read the type list from file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Local variable names for a tested method's parameters
    ///
    /// Use "_" for a parameter without a name.
    Vars {
        /// Parameter names in declaration order
        params: Vec<String>,
    },
    /// Test methods missing from an existing test class
    ///
    /// Input: {"methods": [...], "existing": ["testAdd"], "abstractClass": "Shape"}
    Missing {
        /// Read the request from file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Names { .. } => "names",
            Commands::Types { .. } => "types",
            Commands::Vars { .. } => "vars",
            Commands::Missing { .. } => "missing",
        }
    }
}

/// Load configuration, initialize logging and run the selected command
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config_dir {
        Some(dir) => AppConfig::load_from(dir),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    logging::initialize(&config);

    let span = logging::command_span(cli.command.name());
    let _enter = span.enter();

    let compact = cli.format == "compact";
    let output = match cli.command {
        Commands::Names { input, reserved } => names(&config, input, reserved, compact)?,
        Commands::Types { input } => types(&config, input, compact)?,
        Commands::Vars { params } => vars(&params, compact)?,
        Commands::Missing { input } => missing(&config, input, compact)?,
    };

    println!("{}", output);
    Ok(())
}

fn generator(config: &AppConfig) -> Result<MethodNameGenerator, TestgenError> {
    Ok(MethodNameGenerator::new(config.naming.clone())?)
}

fn names(
    config: &AppConfig,
    input: Option<PathBuf>,
    extra_reserved: Vec<String>,
    compact: bool,
) -> Result<String, TestgenError> {
    let request: NamesRequest = documents::read_document(input.as_deref())?;

    let mut reserved: ReservedNames = request.reserved.into_iter().collect();
    reserved.extend(extra_reserved);

    info!(
        methods = request.methods.len(),
        reserved = reserved.len(),
        "Generating test method names"
    );

    let names = generator(config)?.generate(&request.methods, &reserved)?;
    documents::render(&NamesResponse { names }, compact)
}

fn types(
    config: &AppConfig,
    input: Option<PathBuf>,
    compact: bool,
) -> Result<String, TestgenError> {
    let request: TypesRequest = documents::read_document(input.as_deref())?;

    let types = request
        .types
        .iter()
        .map(|text| TypeDescriptor::parse(text))
        .collect::<Result<Vec<_>, _>>()?;

    info!(types = types.len(), "Generating type identifiers");

    let ids = TypeIdGenerator::new(config.naming.sequence_start).generate(&types);
    let entries = request
        .types
        .into_iter()
        .zip(&types)
        .map(|(text, ty)| TypeIdEntry {
            id: ids.id_of(ty),
            ty: text,
        })
        .collect();

    documents::render(&TypesResponse { ids: entries }, compact)
}

fn vars(params: &[String], compact: bool) -> Result<String, TestgenError> {
    let params: Vec<Option<&str>> = params
        .iter()
        .map(|param| match param.as_str() {
            UNNAMED_PARAM => None,
            name => Some(name),
        })
        .collect();

    documents::render(
        &VarsResponse {
            vars: skeleton_var_names(&params),
        },
        compact,
    )
}

fn missing(
    config: &AppConfig,
    input: Option<PathBuf>,
    compact: bool,
) -> Result<String, TestgenError> {
    let request: MissingRequest = documents::read_document(input.as_deref())?;

    let mut index =
        TestClassIndex::from_methods(request.existing).with_nested_classes(request.nested_classes);
    let tests = index.plan_missing(&generator(config)?, &request.methods)?;

    let impl_class = request.abstract_class.map(|class_name| {
        let (name, generate) = index.resolve_impl_class(&class_name);
        ImplClass { name, generate }
    });

    info!(missing = tests.len(), "Planned missing test methods");

    documents::render(&MissingResponse { tests, impl_class }, compact)
}
