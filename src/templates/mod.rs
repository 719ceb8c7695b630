//! Template Repository
//!
//! Starter templates handed to the generation step alongside the intent.
//! The [`TemplateRepository`] trait is the seam the orchestrating service
//! depends on; [`FileTemplateRepository`] serves templates from disk.

mod file_repository;

pub use file_repository::FileTemplateRepository;

use async_trait::async_trait;

use crate::types::{Intent, Result};

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Load a template by its repository-relative path
    async fn load_template(&self, template_path: &str) -> Result<String>;

    /// List all template paths, sorted, `/`-separated
    async fn list_templates(&self) -> Result<Vec<String>>;

    /// Check whether a template exists; invalid paths report `false`
    async fn template_exists(&self, template_path: &str) -> bool;
}

/// Default template path for an intent's component type
pub fn template_for(intent: &Intent) -> String {
    let typescript = intent.has_feature("typescript");
    let script = if typescript { "ts" } else { "js" };
    let markup = if typescript { "tsx" } else { "jsx" };

    match intent.component_type.as_str() {
        "vue-component" => "vue/component.vue".to_string(),
        "angular-component" => "angular/component.ts".to_string(),
        "svelte-component" => "svelte/component.svelte".to_string(),
        "react-hook" => format!("react/hook.{}", script),
        "react-page" => format!("react/page.{}", markup),
        _ => format!("react/component.{}", markup),
    }
}
