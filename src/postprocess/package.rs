use serde::Serialize;
use std::collections::BTreeMap;

use super::{ComponentLayout, kebab_case};
use crate::intent::StyleLibrary;
use crate::types::Result;

/// Target UI framework, derived from the intent's component type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    React,
    Vue,
    Angular,
    Svelte,
}

impl Framework {
    pub fn from_component_type(component_type: &str) -> Self {
        match component_type {
            "vue-component" => Self::Vue,
            "angular-component" => Self::Angular,
            "svelte-component" => Self::Svelte,
            _ => Self::React,
        }
    }

    fn runtime_dependencies(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::React => &[("react", "^18.2.0"), ("react-dom", "^18.2.0")],
            Self::Vue => &[("vue", "^3.4.0")],
            Self::Angular => &[
                ("@angular/common", "^17.0.0"),
                ("@angular/core", "^17.0.0"),
                ("rxjs", "^7.8.0"),
            ],
            Self::Svelte => &[("svelte", "^4.2.0")],
        }
    }

    fn typescript_dependencies(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::React => &[
                ("@types/react", "^18.2.0"),
                ("@types/react-dom", "^18.2.0"),
                ("typescript", "^5.3.0"),
            ],
            _ => &[("typescript", "^5.3.0")],
        }
    }

    fn test_dependencies(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::React => &[
                ("@testing-library/react", "^14.1.0"),
                ("jsdom", "^23.0.0"),
                ("vitest", "^1.0.0"),
            ],
            Self::Vue => &[
                ("@vue/test-utils", "^2.4.0"),
                ("jsdom", "^23.0.0"),
                ("vitest", "^1.0.0"),
            ],
            Self::Svelte => &[
                ("@testing-library/svelte", "^4.0.0"),
                ("jsdom", "^23.0.0"),
                ("vitest", "^1.0.0"),
            ],
            Self::Angular => &[("@angular/core", "^17.0.0"), ("jest", "^29.7.0")],
        }
    }
}

fn style_dependencies(style: StyleLibrary) -> (&'static [(&'static str, &'static str)], bool) {
    // (packages, dev-only)
    match style {
        StyleLibrary::Tailwind => (
            &[
                ("autoprefixer", "^10.4.0"),
                ("postcss", "^8.4.0"),
                ("tailwindcss", "^3.4.0"),
            ],
            true,
        ),
        StyleLibrary::StyledComponents => (&[("styled-components", "^6.1.0")], false),
        StyleLibrary::Scss => (&[("sass", "^1.69.0")], true),
        StyleLibrary::Css => (&[], true),
    }
}

/// `package.json` contents for a generated component
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn for_layout(layout: &ComponentLayout) -> Self {
        let mut dependencies = BTreeMap::new();
        let mut dev_dependencies = BTreeMap::new();
        let mut scripts = BTreeMap::new();

        insert_all(&mut dependencies, layout.framework.runtime_dependencies());

        if let Some(style) = layout.style {
            let (packages, dev_only) = style_dependencies(style);
            if dev_only {
                insert_all(&mut dev_dependencies, packages);
            } else {
                insert_all(&mut dependencies, packages);
            }
        }

        if layout.typescript {
            insert_all(&mut dev_dependencies, layout.framework.typescript_dependencies());
            scripts.insert("typecheck".to_string(), "tsc --noEmit".to_string());
        }

        if layout.testing {
            // Angular keeps its core as a runtime dependency
            for (name, version) in layout.framework.test_dependencies() {
                if !dependencies.contains_key(*name) {
                    dev_dependencies.insert(name.to_string(), version.to_string());
                }
            }
            let runner = match layout.framework {
                Framework::Angular => "jest",
                _ => "vitest run",
            };
            scripts.insert("test".to_string(), runner.to_string());
        }

        Self {
            name: kebab_case(&layout.name),
            version: "0.1.0".to_string(),
            private: true,
            scripts,
            dependencies,
            dev_dependencies,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn insert_all(map: &mut BTreeMap<String, String>, packages: &[(&str, &str)]) {
    for (name, version) in packages {
        map.insert(name.to_string(), version.to_string());
    }
}

/// Tool configuration files keyed by output path
pub fn config_files(layout: &ComponentLayout) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();

    if layout.typescript {
        files.insert("tsconfig.json".to_string(), tsconfig(layout.framework));
    }

    if layout.style == Some(StyleLibrary::Tailwind) {
        files.insert(
            "tailwind.config.js".to_string(),
            TAILWIND_CONFIG.to_string(),
        );
        files.insert("postcss.config.js".to_string(), POSTCSS_CONFIG.to_string());
    }

    files
}

fn tsconfig(framework: Framework) -> String {
    let mut options = serde_json::json!({
        "target": "ES2020",
        "module": "ESNext",
        "moduleResolution": "bundler",
        "strict": true,
        "skipLibCheck": true,
        "esModuleInterop": true,
    });

    match framework {
        Framework::React => options["jsx"] = "react-jsx".into(),
        Framework::Angular => options["experimentalDecorators"] = true.into(),
        _ => {}
    }

    let config = serde_json::json!({
        "compilerOptions": options,
        "include": ["src"],
    });

    // json! values always serialize
    serde_json::to_string_pretty(&config).unwrap_or_default()
}

const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: ['./index.html', './src/**/*.{js,ts,jsx,tsx,vue,svelte}'],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;

const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
"#;

/// Minimal smoke test for the generated component
pub fn test_stub(layout: &ComponentLayout) -> String {
    let name = &layout.name;
    match layout.framework {
        Framework::React => format!(
            "import {{ render }} from '@testing-library/react';\n\
             import {{ describe, it, expect }} from 'vitest';\n\
             import {name} from './{name}';\n\n\
             describe('{name}', () => {{\n  \
               it('renders', () => {{\n    \
                 const {{ container }} = render(<{name} />);\n    \
                 expect(container).toBeTruthy();\n  \
               }});\n\
             }});\n"
        ),
        Framework::Vue => format!(
            "import {{ mount }} from '@vue/test-utils';\n\
             import {{ describe, it, expect }} from 'vitest';\n\
             import {name} from './{name}.vue';\n\n\
             describe('{name}', () => {{\n  \
               it('mounts', () => {{\n    \
                 const wrapper = mount({name});\n    \
                 expect(wrapper.exists()).toBe(true);\n  \
               }});\n\
             }});\n"
        ),
        Framework::Svelte => format!(
            "import {{ render }} from '@testing-library/svelte';\n\
             import {{ describe, it, expect }} from 'vitest';\n\
             import {name} from './{name}.svelte';\n\n\
             describe('{name}', () => {{\n  \
               it('renders', () => {{\n    \
                 const {{ container }} = render({name});\n    \
                 expect(container).toBeTruthy();\n  \
               }});\n\
             }});\n"
        ),
        Framework::Angular => {
            let file = kebab_case(name);
            format!(
                "import {{ TestBed }} from '@angular/core/testing';\n\
                 import {{ {name}Component }} from './{file}.component';\n\n\
                 describe('{name}Component', () => {{\n  \
                   it('creates', () => {{\n    \
                     const fixture = TestBed.createComponent({name}Component);\n    \
                     expect(fixture.componentInstance).toBeTruthy();\n  \
                   }});\n\
                 }});\n"
            )
        }
    }
}
