use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uiforge::cli::commands;
use uiforge::config::{Config, ConfigLoader, OutputFormat};
use uiforge::types::RequestOptions;

#[derive(Parser)]
#[command(name = "uiforge")]
#[command(
    version,
    about = "Turn natural-language UI requests into component intents and packaged code"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true, help = "Load configuration from this file only")]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Args, Clone, Default)]
struct OptionArgs {
    #[arg(long, help = "Generate TypeScript")]
    typescript: bool,
    #[arg(long, help = "Include a test file")]
    tests: bool,
    #[arg(long, help = "Style library: tailwind, styled-components, css, scss")]
    style: Option<String>,
}

impl From<OptionArgs> for RequestOptions {
    fn from(args: OptionArgs) -> Self {
        RequestOptions {
            use_type_script: args.typescript,
            include_tests: args.tests,
            style_library: args.style.unwrap_or_default(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a prompt into a component intent
    Parse {
        #[arg(help = "Natural-language component request")]
        prompt: String,
        #[command(flatten)]
        options: OptionArgs,
        #[arg(long, help = "Show per-stage results")]
        explain: bool,
        #[arg(short = 'f', long, help = "Output format: text, json")]
        format: Option<OutputFormat>,
    },

    /// Print the generation system prompt for a request
    Prompt {
        #[arg(help = "Natural-language component request")]
        prompt: String,
        #[command(flatten)]
        options: OptionArgs,
        #[arg(long = "type", help = "Component type hint (react, vue, ...)")]
        component_type: Option<String>,
    },

    /// Package generated code into component, config and test files
    Process {
        #[arg(help = "File containing generated code (markdown fences allowed)")]
        file: PathBuf,
        #[arg(long, short, help = "Prompt the code was generated from")]
        prompt: Option<String>,
        #[arg(long, help = "JSON generation request instead of --prompt")]
        request: Option<PathBuf>,
        #[command(flatten)]
        options: OptionArgs,
        #[arg(long, short, help = "Write files into this directory")]
        out: Option<PathBuf>,
        #[arg(short = 'f', long, help = "Output format: text, json")]
        format: Option<OutputFormat>,
    },

    /// Inspect starter templates
    Templates {
        #[command(subcommand)]
        action: TemplatesAction,
    },

    /// Report service health
    Health {
        #[arg(short = 'f', long, help = "Output format: text, json")]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum TemplatesAction {
    /// List available templates
    List {
        #[arg(short = 'f', long, help = "Output format: text, json")]
        format: Option<OutputFormat>,
    },
    /// Print a template
    Show {
        #[arg(help = "Template path relative to the template directory")]
        path: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(short = 'f', long, help = "Output format: text (toml), json")]
        format: Option<OutputFormat>,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31muiforge encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Default hook prints the backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    Ok(config)
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let filter = if cli.verbose {
        "debug".to_string()
    } else if cli.quiet {
        "error".to_string()
    } else {
        config.logging.level.to_lowercase()
    };

    // Logs go to stderr so JSON output stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let default_format = config.output.format;
    let min_confidence = config.parser.min_confidence;

    match cli.command {
        Commands::Parse {
            prompt,
            options,
            explain,
            format,
        } => {
            commands::parse::run(
                &prompt,
                &RequestOptions::from(options),
                format.unwrap_or(default_format),
                explain,
                min_confidence,
            )?;
        }
        Commands::Prompt {
            prompt,
            options,
            component_type,
        } => {
            let mut request = commands::process::build_request(None, Some(prompt), options.into())?;
            request.component_type = component_type;

            let rt = Runtime::new()?;
            rt.block_on(commands::prompt::run(&request, &config.templates))?;
        }
        Commands::Process {
            file,
            prompt,
            request,
            options,
            out,
            format,
        } => {
            let request =
                commands::process::build_request(request.as_deref(), prompt, options.into())?;
            commands::process::run(commands::process::ProcessArgs {
                code_file: &file,
                request,
                out_dir: out.as_deref(),
                format: format.unwrap_or(default_format),
                min_confidence,
            })?;
        }
        Commands::Templates { action } => {
            let rt = Runtime::new()?;
            match action {
                TemplatesAction::List { format } => {
                    rt.block_on(commands::templates::list(
                        &config.templates,
                        format.unwrap_or(default_format),
                    ))?;
                }
                TemplatesAction::Show { path } => {
                    rt.block_on(commands::templates::show(&config.templates, &path))?;
                }
            }
        }
        Commands::Health { format } => {
            commands::health::run(&config, format.unwrap_or(OutputFormat::Json))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                commands::config::show(&config, global, format.unwrap_or(OutputFormat::Text))?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                commands::config::init(global, force)?;
            }
        },
    }

    Ok(())
}
