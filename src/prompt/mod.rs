//! Prompt Construction
//!
//! Builds the system prompt handed to the code-generation model from a
//! parsed [`Intent`], the request options and an optional starter template.
//! Pure string building; no model calls happen here.

use crate::intent::StyleLibrary;
use crate::types::{Intent, RequestOptions};

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Role definition with expertise area
    Role { expertise: String, task: String },
    /// Numbered objectives
    Objectives(Vec<String>),
    /// Ordered key-value pairs
    Context(Vec<(String, String)>),
    /// Code block with language
    Code { language: String, content: String },
    /// Bulleted constraints
    Constraints(Vec<String>),
    Custom(String),
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(mut self, expertise: &str, task: &str) -> Self {
        self.sections.push(PromptSection::Role {
            expertise: expertise.to_string(),
            task: task.to_string(),
        });
        self
    }

    pub fn objectives(mut self, objectives: Vec<&str>) -> Self {
        self.sections.push(PromptSection::Objectives(
            objectives.into_iter().map(String::from).collect(),
        ));
        self
    }

    /// Add a context item, appending to the first context section
    pub fn context_item(mut self, key: &str, value: &str) -> Self {
        let item = (key.to_string(), value.to_string());
        match self
            .sections
            .iter_mut()
            .find_map(|section| match section {
                PromptSection::Context(items) => Some(items),
                _ => None,
            }) {
            Some(items) => items.push(item),
            None => self.sections.push(PromptSection::Context(vec![item])),
        }
        self
    }

    pub fn code(mut self, language: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Code {
            language: language.to_string(),
            content: content.to_string(),
        });
        self
    }

    pub fn constraints(mut self, constraints: Vec<String>) -> Self {
        if !constraints.is_empty() {
            self.sections.push(PromptSection::Constraints(constraints));
        }
        self
    }

    pub fn custom(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Custom(content.to_string()));
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Role { expertise, task } => {
                    prompt.push_str("<ROLE>\n");
                    prompt.push_str(&format!(
                        "You are an expert {} specializing in {}.\n",
                        expertise, task
                    ));
                    prompt.push_str("</ROLE>\n\n");
                }
                PromptSection::Objectives(objectives) => {
                    prompt.push_str("<OBJECTIVES>\n");
                    for (i, obj) in objectives.iter().enumerate() {
                        prompt.push_str(&format!("{}. {}\n", i + 1, obj));
                    }
                    prompt.push_str("</OBJECTIVES>\n\n");
                }
                PromptSection::Context(items) => {
                    prompt.push_str("# Context\n\n");
                    for (key, value) in items {
                        prompt.push_str(&format!("**{}**: {}\n", key, value));
                    }
                    prompt.push('\n');
                }
                PromptSection::Code { language, content } => {
                    prompt.push_str(&format!("```{}\n", language));
                    prompt.push_str(content.trim_end());
                    prompt.push_str("\n```\n\n");
                }
                PromptSection::Constraints(constraints) => {
                    prompt.push_str("<CONSTRAINTS>\n");
                    for constraint in constraints {
                        prompt.push_str(&format!("- {}\n", constraint));
                    }
                    prompt.push_str("</CONSTRAINTS>\n\n");
                }
                PromptSection::Custom(content) => {
                    prompt.push_str(&content);
                    prompt.push_str("\n\n");
                }
            }
        }

        prompt.trim_end().to_string()
    }
}

/// System prompt for generating one component
pub fn component_generation(
    intent: &Intent,
    options: &RequestOptions,
    template: Option<&str>,
) -> String {
    let framework = framework_label(&intent.component_type);
    let typescript = options.use_type_script || intent.has_feature("typescript");
    let language = if typescript { "TypeScript" } else { "JavaScript" };

    let name = if intent.has_name() {
        intent.component_name.as_str()
    } else {
        "(choose a descriptive PascalCase name)"
    };
    let features = if intent.features.is_empty() {
        "none".to_string()
    } else {
        intent
            .features
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut builder = PromptBuilder::new()
        .role(
            &format!("{} developer", framework),
            "production-ready UI components",
        )
        .objectives(vec![
            "Implement the component the user describes",
            "Return a single self-contained source file",
            "Keep the code accessible and idiomatic for the framework",
        ])
        .context_item("Component type", &intent.component_type)
        .context_item("Component name", name)
        .context_item("Language", language)
        .context_item("Features", &features)
        .constraints(constraints(intent, options, typescript));

    if let Some(template) = template.filter(|t| !t.trim().is_empty()) {
        builder = builder
            .custom("Start from this template and keep its structure:")
            .code(template_language(&intent.component_type, typescript), template);
    }

    builder
        .custom("Respond with the code in one fenced code block and nothing else.")
        .build()
}

fn constraints(intent: &Intent, options: &RequestOptions, typescript: bool) -> Vec<String> {
    let mut constraints = Vec::new();

    if typescript {
        constraints.push("Type all props and state explicitly".to_string());
    }
    match StyleLibrary::parse(&options.style_library) {
        Some(StyleLibrary::Tailwind) => {
            constraints.push("Style with Tailwind utility classes".to_string())
        }
        Some(StyleLibrary::StyledComponents) => {
            constraints.push("Style with styled-components".to_string())
        }
        Some(StyleLibrary::Scss) => constraints.push("Style with SCSS modules".to_string()),
        Some(StyleLibrary::Css) => constraints.push("Style with plain CSS modules".to_string()),
        None if !options.style_library.trim().is_empty() => constraints.push(format!(
            "Style with {}",
            options.style_library.trim()
        )),
        None => {}
    }
    if intent.has_feature("api") {
        constraints.push("Handle loading and error states for remote data".to_string());
    }
    if intent.has_feature("forms") {
        constraints.push("Validate form input before submission".to_string());
    }
    if options.include_tests {
        constraints.push("Export the component so it can be tested in isolation".to_string());
    }

    constraints
}

fn framework_label(component_type: &str) -> &'static str {
    match component_type {
        "vue-component" => "Vue",
        "angular-component" => "Angular",
        "svelte-component" => "Svelte",
        _ => "React",
    }
}

fn template_language(component_type: &str, typescript: bool) -> &'static str {
    match component_type {
        "vue-component" => "vue",
        "svelte-component" => "svelte",
        "angular-component" => "typescript",
        "react-hook" if typescript => "ts",
        "react-hook" => "js",
        _ if typescript => "tsx",
        _ => "jsx",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::parse_intent;

    #[test]
    fn test_basic_prompt() {
        let prompt = PromptBuilder::new()
            .role("React developer", "UI components")
            .objectives(vec!["Build it", "Test it"])
            .build();

        assert!(prompt.contains("<ROLE>"));
        assert!(prompt.contains("expert React developer"));
        assert!(prompt.contains("1. Build it"));
        assert!(prompt.contains("2. Test it"));
    }

    #[test]
    fn test_context_items_keep_order() {
        let prompt = PromptBuilder::new()
            .context_item("Zeta", "last")
            .context_item("Alpha", "first")
            .build();

        let zeta = prompt.find("**Zeta**: last").unwrap();
        let alpha = prompt.find("**Alpha**: first").unwrap();
        assert!(zeta < alpha);
        assert_eq!(prompt.matches("# Context").count(), 1);
    }

    #[test]
    fn test_empty_constraints_skipped() {
        let prompt = PromptBuilder::new().constraints(Vec::new()).build();
        assert!(prompt.is_empty());
    }

    #[test]
    fn test_component_generation_prompt() {
        let options = RequestOptions::default().typescript().with_style("tailwind");
        let intent = parse_intent("Create a UserProfile component that fetches data", &options);
        let prompt = component_generation(&intent, &options, Some("export {}"));

        assert!(prompt.contains("**Component name**: UserProfile"));
        assert!(prompt.contains("**Language**: TypeScript"));
        assert!(prompt.contains("Tailwind utility classes"));
        assert!(prompt.contains("loading and error states"));
        assert!(prompt.contains("```tsx\nexport {}\n```"));
        assert!(prompt.ends_with("nothing else."));
    }

    #[test]
    fn test_prompt_without_name_or_template() {
        let options = RequestOptions::default();
        let intent = parse_intent("", &options);
        let prompt = component_generation(&intent, &options, None);

        assert!(prompt.contains("choose a descriptive PascalCase name"));
        assert!(prompt.contains("**Features**: none"));
        assert!(!prompt.contains("```"));
        assert!(!prompt.contains("<CONSTRAINTS>"));
    }

    #[test]
    fn test_unrecognized_style_passed_through() {
        let options = RequestOptions::default().with_style("emotion");
        let intent = parse_intent("vue card", &options);
        let prompt = component_generation(&intent, &options, None);

        assert!(prompt.contains("expert Vue developer"));
        assert!(prompt.contains("Style with emotion"));
    }
}
