//! Process Command
//!
//! Package generated component code: parse the request's intent, run the
//! post-processor over a code file, then print or write the resulting files.
//!
//! Usage:
//!   uiforge process generated.md --prompt "create a Navbar" [--typescript] [--out ./out]
//!   uiforge process generated.md --request request.json

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cli::Output;
use crate::config::OutputFormat;
use crate::intent::IntentParser;
use crate::postprocess::{DefaultPostProcessor, PostProcessor, file_counts};
use crate::types::{
    ForgeError, GeneratedFile, GenerationRequest, RequestOptions, Result, ValidationError,
};

pub struct ProcessArgs<'a> {
    pub code_file: &'a Path,
    pub request: GenerationRequest,
    pub out_dir: Option<&'a Path>,
    pub format: OutputFormat,
    pub min_confidence: f64,
}

pub fn run(args: ProcessArgs<'_>) -> Result<()> {
    let code = fs::read_to_string(args.code_file)?;

    let intent = IntentParser::new().parse_request(&args.request);
    if !intent.meets(args.min_confidence) {
        warn!(
            confidence = intent.confidence,
            threshold = args.min_confidence,
            "intent below confidence threshold"
        );
    }

    let response =
        DefaultPostProcessor::new().process_code(&code, &intent, &args.request.options)?;

    let written = match args.out_dir {
        Some(dir) => write_files(dir, &response.files)?,
        None => Vec::new(),
    };

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            let output = Output::new();
            output.header(&format!(
                "{} ({})",
                if intent.has_name() {
                    intent.component_name.as_str()
                } else {
                    "Component"
                },
                intent.component_type
            ));
            for file in &response.files {
                output.file(file);
            }

            let summary = file_counts(&response)
                .iter()
                .map(|(kind, count)| format!("{} {}", count, kind))
                .collect::<Vec<_>>()
                .join(", ");
            match args.out_dir {
                Some(dir) => output.success(&format!(
                    "Wrote {} files to {} ({})",
                    written.len(),
                    dir.display(),
                    summary
                )),
                None => output.info(&format!("{} (use --out to write)", summary)),
            }
        }
    }

    Ok(())
}

/// Build a request from either a JSON request file or a prompt plus options
pub fn build_request(
    request_file: Option<&Path>,
    prompt: Option<String>,
    options: RequestOptions,
) -> Result<GenerationRequest> {
    match (request_file, prompt) {
        (Some(path), None) => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        (None, Some(prompt)) => Ok(GenerationRequest {
            prompt,
            component_type: None,
            options,
        }),
        (Some(_), Some(_)) => Err(ValidationError::new("--prompt and --request are exclusive")
            .with_field("prompt")
            .into()),
        (None, None) => Err(ValidationError::new("a prompt is required")
            .with_field("prompt")
            .with_comparison("--prompt or --request", "neither")
            .into()),
    }
}

/// Write generated files under `dir`, creating parent directories
pub fn write_files(dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    // Every path is checked before anything touches the disk
    for file in files {
        let relative = Path::new(&file.path);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(ForgeError::PostProcess(format!(
                "refusing to write outside output directory: {}",
                file.path
            )));
        }
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target = dir.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &file.content)?;
        info!("Wrote {}", target.display());
        written.push(target);
    }

    Ok(written)
}
