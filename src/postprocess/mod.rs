//! Post-Processing
//!
//! Turns raw generated code into a packaged [`GenerationResponse`]: extracts
//! the code from markdown fences, names the component file, and adds
//! `package.json`, tool configs and a test stub according to the intent.

mod package;

pub use package::{Framework, PackageManifest};

use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

use crate::intent::StyleLibrary;
use crate::types::{
    FileKind, ForgeError, GeneratedFile, GenerationResponse, Intent, RequestOptions, Result,
};

/// Fenced code block patterns, tried in order
const CODE_FENCE_PATTERNS: &[&str] = &[
    r"```[\w+.\-]*[ \t]*\r?\n([\s\S]*?)```",
    r"~~~[\w+.\-]*[ \t]*\r?\n([\s\S]*?)~~~",
];

/// Component name used when the intent carries none
const FALLBACK_COMPONENT_NAME: &str = "Component";

pub trait PostProcessor: Send + Sync {
    fn process_code(
        &self,
        code: &str,
        intent: &Intent,
        options: &RequestOptions,
    ) -> Result<GenerationResponse>;
}

pub struct DefaultPostProcessor {
    code_fences: Vec<Regex>,
}

impl Default for DefaultPostProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultPostProcessor {
    pub fn new() -> Self {
        // Compile once; patterns are constant
        let code_fences = CODE_FENCE_PATTERNS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        Self { code_fences }
    }

    /// Code inside the first fenced block, or the whole input when unfenced
    pub fn extract_code<'a>(&self, raw: &'a str) -> &'a str {
        self.code_fences
            .iter()
            .find_map(|fence| fence.captures(raw).and_then(|caps| caps.get(1)))
            .map(|m| m.as_str())
            .unwrap_or(raw)
            .trim()
    }
}

impl PostProcessor for DefaultPostProcessor {
    fn process_code(
        &self,
        code: &str,
        intent: &Intent,
        options: &RequestOptions,
    ) -> Result<GenerationResponse> {
        let component_code = self.extract_code(code);
        if component_code.is_empty() {
            return Err(ForgeError::PostProcess(
                "generated output contains no code".to_string(),
            ));
        }

        let layout = ComponentLayout::new(intent, options);
        let manifest = PackageManifest::for_layout(&layout);
        let package_json = manifest.to_json()?;
        let config_files = package::config_files(&layout);

        let mut files = vec![
            GeneratedFile {
                path: layout.component_path(),
                content: format!("{}\n", component_code),
                kind: FileKind::Component,
            },
            GeneratedFile {
                path: "package.json".to_string(),
                content: package_json.clone(),
                kind: FileKind::Config,
            },
        ];

        files.extend(config_files.iter().map(|(path, content)| GeneratedFile {
            path: path.clone(),
            content: content.clone(),
            kind: FileKind::Config,
        }));

        if layout.testing {
            files.push(GeneratedFile {
                path: layout.test_path(),
                content: package::test_stub(&layout),
                kind: FileKind::Test,
            });
        }

        debug!(
            component = %layout.name,
            files = files.len(),
            "post-processed generated code"
        );

        Ok(GenerationResponse {
            component_code: component_code.to_string(),
            package_json: Some(package_json),
            config_files,
            files,
        })
    }
}

/// File naming and tooling decisions derived from an intent
#[derive(Debug, Clone)]
pub struct ComponentLayout {
    pub name: String,
    pub framework: Framework,
    pub typescript: bool,
    pub testing: bool,
    pub style: Option<StyleLibrary>,
}

impl ComponentLayout {
    pub fn new(intent: &Intent, options: &RequestOptions) -> Self {
        let style = StyleLibrary::parse(&options.style_library).or_else(|| {
            [
                StyleLibrary::Tailwind,
                StyleLibrary::StyledComponents,
                StyleLibrary::Scss,
                StyleLibrary::Css,
            ]
            .into_iter()
            .find(|lib| intent.has_feature(lib.feature()))
        });

        Self {
            name: sanitize_component_name(&intent.component_name),
            framework: Framework::from_component_type(&intent.component_type),
            typescript: options.use_type_script || intent.has_feature("typescript"),
            testing: options.include_tests || intent.has_feature("testing"),
            style,
        }
    }

    pub fn script_ext(&self) -> &'static str {
        if self.typescript { "ts" } else { "js" }
    }

    pub fn component_path(&self) -> String {
        match self.framework {
            Framework::Vue => format!("src/components/{}.vue", self.name),
            Framework::Svelte => format!("src/components/{}.svelte", self.name),
            Framework::Angular => format!(
                "src/app/{}/{}.component.ts",
                kebab_case(&self.name),
                kebab_case(&self.name)
            ),
            Framework::React => {
                let ext = if self.typescript { "tsx" } else { "jsx" };
                format!("src/components/{}.{}", self.name, ext)
            }
        }
    }

    pub fn test_path(&self) -> String {
        match self.framework {
            Framework::Angular => format!(
                "src/app/{}/{}.component.spec.ts",
                kebab_case(&self.name),
                kebab_case(&self.name)
            ),
            Framework::React => {
                let ext = if self.typescript { "tsx" } else { "jsx" };
                format!("src/components/{}.test.{}", self.name, ext)
            }
            _ => format!("src/components/{}.test.{}", self.name, self.script_ext()),
        }
    }
}

/// Keep identifier-safe characters only
fn sanitize_component_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    match cleaned.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => cleaned,
        Some(_) => format!("{}{}", FALLBACK_COMPONENT_NAME, cleaned),
        None => FALLBACK_COMPONENT_NAME.to_string(),
    }
}

/// `UserProfile` → `user-profile`
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else if c == '_' {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

/// Summarize generated files by kind, e.g. for CLI output
pub fn file_counts(response: &GenerationResponse) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for file in &response.files {
        *counts.entry(file.kind.to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn intent(component_type: &str, name: &str, features: &[&str]) -> Intent {
        Intent {
            component_type: component_type.to_string(),
            component_name: name.to_string(),
            features: features.iter().map(|f| f.to_string()).collect::<BTreeSet<_>>(),
            confidence: 0.6,
        }
    }

    #[test]
    fn test_extract_fenced_code() {
        let processor = DefaultPostProcessor::new();
        let raw = "Here you go:\n```tsx\nexport const A = () => null;\n```\nEnjoy!";
        assert_eq!(processor.extract_code(raw), "export const A = () => null;");
    }

    #[test]
    fn test_extract_unfenced_code() {
        let processor = DefaultPostProcessor::new();
        assert_eq!(processor.extract_code("  const x = 1;\n"), "const x = 1;");
    }

    #[test]
    fn test_extract_first_of_many_blocks() {
        let processor = DefaultPostProcessor::new();
        let raw = "```js\nfirst();\n```\n\n```js\nsecond();\n```";
        assert_eq!(processor.extract_code(raw), "first();");
    }

    #[test]
    fn test_empty_code_rejected() {
        let processor = DefaultPostProcessor::new();
        let err = processor
            .process_code(
                "```\n\n```",
                &intent("react-component", "A", &[]),
                &RequestOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, ForgeError::PostProcess(_)));
    }

    #[test]
    fn test_react_typescript_with_tests() {
        let processor = DefaultPostProcessor::new();
        let options = RequestOptions::default().typescript().with_tests();
        let response = processor
            .process_code(
                "```tsx\nexport function UserProfile() { return null; }\n```",
                &intent("react-component", "UserProfile", &["typescript", "testing"]),
                &options,
            )
            .unwrap();

        let paths: Vec<&str> = response.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "src/components/UserProfile.tsx",
                "package.json",
                "tsconfig.json",
                "src/components/UserProfile.test.tsx",
            ]
        );
        assert_eq!(
            response.component_code,
            "export function UserProfile() { return null; }"
        );
        assert!(response.config_files.contains_key("tsconfig.json"));

        let counts = file_counts(&response);
        assert_eq!(counts["component"], 1);
        assert_eq!(counts["config"], 2);
        assert_eq!(counts["test"], 1);
    }

    #[test]
    fn test_tailwind_from_prompt_feature() {
        let processor = DefaultPostProcessor::new();
        let response = processor
            .process_code(
                "<template><div/></template>",
                &intent("vue-component", "Sidebar", &["tailwind"]),
                &RequestOptions::default(),
            )
            .unwrap();

        assert_eq!(response.files[0].path, "src/components/Sidebar.vue");
        assert!(response.config_files.contains_key("tailwind.config.js"));
        assert!(response.config_files.contains_key("postcss.config.js"));
        assert!(response.package_json.unwrap().contains("tailwindcss"));
    }

    #[test]
    fn test_angular_layout() {
        let layout = ComponentLayout::new(
            &intent("angular-component", "UserCard", &[]),
            &RequestOptions::default().with_tests(),
        );
        assert_eq!(
            layout.component_path(),
            "src/app/user-card/user-card.component.ts"
        );
        assert_eq!(
            layout.test_path(),
            "src/app/user-card/user-card.component.spec.ts"
        );
    }

    #[test]
    fn test_sanitize_component_name() {
        assert_eq!(sanitize_component_name("UserProfile"), "UserProfile");
        assert_eq!(sanitize_component_name("../Evil/Name"), "EvilName");
        assert_eq!(sanitize_component_name("3D"), "Component3D");
        assert_eq!(sanitize_component_name(""), "Component");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("UserProfile"), "user-profile");
        assert_eq!(kebab_case("Navbar"), "navbar");
        assert_eq!(kebab_case("my_widget"), "my-widget");
    }
}
