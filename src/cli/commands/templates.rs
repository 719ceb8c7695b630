//! Templates Command
//!
//! Inspect the starter template repository.
//!
//! Usage:
//!   uiforge templates list [-f json]
//!   uiforge templates show react/component.tsx

use crate::cli::Output;
use crate::config::{OutputFormat, TemplatesConfig};
use crate::templates::{FileTemplateRepository, TemplateRepository};
use crate::types::Result;

pub async fn list(config: &TemplatesConfig, format: OutputFormat) -> Result<()> {
    let repo = FileTemplateRepository::from_config(config)?;
    let templates = repo.list_templates().await?;

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "dir": repo.base_dir().display().to_string(),
                "templates": templates,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let output = Output::new();
            output.header(&format!("Templates in {}", repo.base_dir().display()));
            if templates.is_empty() {
                output.info("No templates found");
            }
            for template in &templates {
                println!("  {}", template);
            }
        }
    }

    Ok(())
}

pub async fn show(config: &TemplatesConfig, template_path: &str) -> Result<()> {
    let repo = FileTemplateRepository::from_config(config)?;
    let content = repo.load_template(template_path).await?;
    print!("{}", content);
    if !content.ends_with('\n') {
        println!();
    }
    Ok(())
}
