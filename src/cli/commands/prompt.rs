//! Prompt Command
//!
//! Print the system prompt that would accompany a generation request,
//! including the default starter template for the detected component type.

use tracing::debug;

use crate::config::TemplatesConfig;
use crate::intent::IntentParser;
use crate::prompt::component_generation;
use crate::templates::{FileTemplateRepository, TemplateRepository, template_for};
use crate::types::{GenerationRequest, Result};

pub async fn run(request: &GenerationRequest, config: &TemplatesConfig) -> Result<()> {
    let intent = IntentParser::new().parse_request(request);
    let template = load_default_template(config, &template_for(&intent)).await?;

    println!(
        "{}",
        component_generation(&intent, &request.options, template.as_deref())
    );
    Ok(())
}

/// Load a template when the repository has it; a missing directory or file
/// means no template
pub async fn load_default_template(
    config: &TemplatesConfig,
    template_path: &str,
) -> Result<Option<String>> {
    if !config.dir.is_dir() {
        debug!("Template directory {} missing", config.dir.display());
        return Ok(None);
    }

    let repo = FileTemplateRepository::from_config(config)?;
    if !repo.template_exists(template_path).await {
        debug!("No template at {}", template_path);
        return Ok(None);
    }

    repo.load_template(template_path).await.map(Some)
}
