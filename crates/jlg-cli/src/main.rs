use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use dialoguer::Input;

use jlg_core::config::{self, CONFIG_FILE_NAME, JlgConfig};
use jlg_core::ir::IrSpec;
use jlg_core::parse;
use jlg_core::transform::{self, TransformOptions};
use jlg_core::write::{WriteReport, write_files};
use jlg_core::CodeGenerator;
use jlg_java::JavaLayersGenerator;

#[derive(Parser)]
#[command(
    name = "jlg",
    about = "Generate layered Java sources from a Swagger 2.0 spec",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate controller, service, business and dao classes per resource
    Generate {
        /// Path to the spec file (YAML or JSON); prompted for when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a spec
    Validate {
        /// Path to the spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the resource models built from a spec
    Inspect {
        /// Path to the spec file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new jlg configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => cmd_generate(input, output),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "jlg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<JlgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn transform_options(cfg: &JlgConfig) -> TransformOptions {
    TransformOptions {
        aliases: cfg.naming.aliases.clone(),
        duplicate_operation_ids: cfg.validation.duplicate_operation_ids,
    }
}

fn load_spec(path: &Path, cfg: &JlgConfig) -> Result<IrSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let parsed = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };

    let ir = transform::transform_with_options(&parsed, &transform_options(cfg))?;
    Ok(ir)
}

/// Ask for the spec file name on the terminal.
fn prompt_for_input() -> Result<PathBuf> {
    let name = Input::<String>::new()
        .with_prompt("Spec file name (e.g. sample.yaml)")
        .interact_text()
        .context("failed to read spec file name")?;
    Ok(PathBuf::from(name.trim()))
}

fn print_report(report: &WriteReport) {
    for path in &report.written {
        eprintln!("  wrote {}", path.display());
    }
    for path in &report.skipped {
        eprintln!("  skipped {} (already exists)", path.display());
    }
    for failure in &report.failed {
        eprintln!("  FAILED {}: {}", failure.path.display(), failure.error);
    }
}

fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = match input.or_else(|| cfg.input.as_ref().map(PathBuf::from)) {
        Some(path) => path,
        None => prompt_for_input()?,
    };
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let ir = load_spec(&input, &cfg)?;
    log::info!(
        "{} resource(s), {} endpoint(s) in {}",
        ir.resources.len(),
        ir.endpoint_count(),
        input.display()
    );

    let generator = JavaLayersGenerator;
    eprintln!("Generating {} → {}", generator.id(), output_dir.display());

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;

    let files = generator.generate(&ir, &cfg.java)?;
    let report = write_files(&output_dir, &files);
    print_report(&report);

    eprintln!(
        "{} written, {} skipped, {} failed in {}",
        report.written.len(),
        report.skipped.len(),
        report.failed.len(),
        output_dir.display()
    );

    if !report.is_success() {
        anyhow::bail!("{} file(s) could not be written", report.failed.len());
    }
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let parsed = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };

    match &parsed.info {
        Some(info) => eprintln!("Valid Swagger spec: {} ({})", info.title, info.version),
        None => eprintln!("Valid Swagger spec"),
    }
    eprintln!("  Paths: {}", parsed.paths.len());
    eprintln!("  Definitions: {}", parsed.definitions.len());

    // Also validate that it transforms successfully
    let cfg = try_load_config()?.unwrap_or_default();
    let ir = transform::transform_with_options(&parsed, &transform_options(&cfg))?;
    eprintln!("  Resources: {}", ir.resources.len());
    eprintln!("  Endpoints: {}", ir.endpoint_count());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let ir = load_spec(&input, &cfg)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&ir)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&ir)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
