use async_trait::async_trait;
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

use super::TemplateRepository;
use crate::config::TemplatesConfig;
use crate::types::{ForgeError, Result};

/// Largest template served (256KB)
const MAX_TEMPLATE_SIZE: u64 = 262_144;

/// Filesystem-backed template repository rooted at a base directory
#[derive(Debug, Clone)]
pub struct FileTemplateRepository {
    base_dir: PathBuf,
    extensions: Vec<String>,
}

impl FileTemplateRepository {
    /// Open a repository, creating the base directory if missing
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        if !base_dir.exists() {
            std::fs::create_dir_all(&base_dir)?;
            debug!("Created template directory: {}", base_dir.display());
        }

        Ok(Self {
            base_dir,
            extensions: Vec::new(),
        })
    }

    pub fn from_config(config: &TemplatesConfig) -> Result<Self> {
        Ok(Self::new(&config.dir)?.with_extensions(config.extensions.clone()))
    }

    /// Only list files with these extensions; empty lists everything
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a relative template path, rejecting anything that could
    /// escape the base directory
    pub fn resolve(&self, template_path: &str) -> Result<PathBuf> {
        let trimmed = template_path.trim();
        if trimmed.is_empty() {
            return Err(ForgeError::invalid_path(template_path, "empty path"));
        }

        let relative = Path::new(trimmed);
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => {
                    return Err(ForgeError::invalid_path(
                        template_path,
                        "parent directory traversal",
                    ));
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(ForgeError::invalid_path(
                        template_path,
                        "absolute paths are not allowed",
                    ));
                }
            }
        }

        Ok(self.base_dir.join(relative))
    }

    fn matches_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    fn scan(&self) -> Vec<String> {
        let walker = WalkBuilder::new(&self.base_dir)
            .hidden(true)
            .git_ignore(false)
            .follow_links(false)
            .build();

        let mut templates: Vec<String> = walker
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|entry| self.matches_extension(entry.path()))
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.base_dir)
                    .ok()
                    .map(|p| {
                        p.components()
                            .map(|c| c.as_os_str().to_string_lossy().into_owned())
                            .collect::<Vec<_>>()
                            .join("/")
                    })
            })
            .collect();

        templates.sort();
        templates
    }
}

#[async_trait]
impl TemplateRepository for FileTemplateRepository {
    async fn load_template(&self, template_path: &str) -> Result<String> {
        let path = self.resolve(template_path)?;

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => metadata,
            Ok(_) => return Err(ForgeError::TemplateNotFound(template_path.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ForgeError::TemplateNotFound(template_path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if metadata.len() > MAX_TEMPLATE_SIZE {
            warn!(
                "Template {} is {} bytes, exceeds {}",
                template_path,
                metadata.len(),
                MAX_TEMPLATE_SIZE
            );
            return Err(ForgeError::invalid_path(template_path, "template too large"));
        }

        let content = tokio::fs::read_to_string(&path).await?;
        debug!("Loaded template {} ({} bytes)", template_path, content.len());
        Ok(content)
    }

    async fn list_templates(&self) -> Result<Vec<String>> {
        let repo = self.clone();
        let templates = tokio::task::spawn_blocking(move || repo.scan())
            .await
            .map_err(|e| ForgeError::Io(std::io::Error::other(e)))?;

        debug!("Found {} templates", templates.len());
        Ok(templates)
    }

    async fn template_exists(&self, template_path: &str) -> bool {
        match self.resolve(template_path) {
            Ok(path) => tokio::fs::metadata(&path)
                .await
                .map(|m| m.is_file())
                .unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileTemplateRepository) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("react")).unwrap();
        fs::create_dir_all(temp.path().join("vue")).unwrap();
        fs::write(
            temp.path().join("react/component.tsx"),
            "export const Component = () => null;",
        )
        .unwrap();
        fs::write(temp.path().join("vue/component.vue"), "<template></template>").unwrap();
        fs::write(temp.path().join("README.md"), "# templates").unwrap();

        let repo = FileTemplateRepository::new(temp.path())
            .unwrap()
            .with_extensions(vec!["tsx".to_string(), "vue".to_string()]);
        (temp, repo)
    }

    #[test]
    fn test_new_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested/templates");
        let repo = FileTemplateRepository::new(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(repo.base_dir(), dir.as_path());
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let (_temp, repo) = setup();
        assert!(matches!(
            repo.resolve("../etc/passwd"),
            Err(ForgeError::InvalidTemplatePath { .. })
        ));
        assert!(repo.resolve("react/../../secret").is_err());
        assert!(repo.resolve("/etc/passwd").is_err());
        assert!(repo.resolve("   ").is_err());
        assert!(repo.resolve("./react/component.tsx").is_ok());
    }

    #[tokio::test]
    async fn test_load_template() {
        let (_temp, repo) = setup();
        let content = repo.load_template("react/component.tsx").await.unwrap();
        assert!(content.contains("Component"));
    }

    #[tokio::test]
    async fn test_load_missing_template() {
        let (_temp, repo) = setup();
        let err = repo.load_template("react/missing.tsx").await.unwrap_err();
        assert!(matches!(err, ForgeError::TemplateNotFound(_)));

        let err = repo.load_template("react").await.unwrap_err();
        assert!(matches!(err, ForgeError::TemplateNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_templates_filters_and_sorts() {
        let (_temp, repo) = setup();
        let templates = repo.list_templates().await.unwrap();
        assert_eq!(templates, vec!["react/component.tsx", "vue/component.vue"]);
    }

    #[tokio::test]
    async fn test_list_without_extension_filter() {
        let (temp, _) = setup();
        let repo = FileTemplateRepository::new(temp.path()).unwrap();
        let templates = repo.list_templates().await.unwrap();
        assert_eq!(templates.len(), 3);
        assert!(templates.contains(&"README.md".to_string()));
    }

    #[tokio::test]
    async fn test_template_exists() {
        let (_temp, repo) = setup();
        assert!(repo.template_exists("vue/component.vue").await);
        assert!(!repo.template_exists("vue/missing.vue").await);
        assert!(!repo.template_exists("../vue/component.vue").await);
        assert!(!repo.template_exists("vue").await);
    }
}
