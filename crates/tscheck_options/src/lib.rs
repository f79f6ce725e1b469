//! tscheck_options: Compiler options and tsconfig.json loading.
//!
//! `CompilerOptions` mirrors the subset of the tsconfig.json schema the
//! checker reads. Every field is optional; the `emit_*` and `*_enabled`
//! accessors apply the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Compiler options, matching the tsconfig.json `compilerOptions` schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: Option<ScriptTarget>,
    pub module: Option<ModuleKind>,

    // -- Strictness --
    pub strict: Option<bool>,
    pub always_strict: Option<bool>,

    // -- Modules --
    pub isolated_modules: Option<bool>,
    pub verbatim_module_syntax: Option<bool>,

    // -- Classes and decorators --
    pub experimental_decorators: Option<bool>,
    pub use_define_for_class_fields: Option<bool>,

    // -- Checks --
    pub allow_unreachable_code: Option<bool>,
    pub no_emit: Option<bool>,
}

impl CompilerOptions {
    pub fn emit_script_target(&self) -> ScriptTarget {
        self.target.unwrap_or(ScriptTarget::ES5)
    }

    pub fn emit_module_kind(&self) -> ModuleKind {
        match self.module {
            Some(module) => module,
            None if self.emit_script_target() >= ScriptTarget::ES2015 => ModuleKind::ES2015,
            None => ModuleKind::CommonJS,
        }
    }

    pub fn use_define_for_class_fields(&self) -> bool {
        self.use_define_for_class_fields
            .unwrap_or(self.emit_script_target() >= ScriptTarget::ES2022)
    }

    /// Class fields are emitted as native `[[Define]]` fields.
    pub fn emit_standard_class_fields(&self) -> bool {
        self.use_define_for_class_fields != Some(false) && self.emit_script_target() >= ScriptTarget::ES2022
    }

    pub fn isolated_modules_enabled(&self) -> bool {
        self.isolated_modules == Some(true) || self.verbatim_module_syntax == Some(true)
    }

    /// Name of the option that turned isolated modules on, for messages.
    pub fn isolated_modules_flag_name(&self) -> &'static str {
        if self.verbatim_module_syntax == Some(true) {
            "verbatimModuleSyntax"
        } else {
            "isolatedModules"
        }
    }

    pub fn strict_enabled(&self) -> bool {
        self.strict == Some(true)
    }

    /// `alwaysStrict`, defaulting to `strict`.
    pub fn always_strict_enabled(&self) -> bool {
        self.always_strict.unwrap_or_else(|| self.strict_enabled())
    }

    pub fn experimental_decorators_enabled(&self) -> bool {
        self.experimental_decorators == Some(true)
    }
}

// ============================================================================
// Targets and module kinds
// ============================================================================

/// Script target version. Ordered from oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ScriptTarget {
    ES3,
    ES5,
    ES2015,
    ES2016,
    ES2017,
    ES2018,
    ES2019,
    ES2020,
    ES2021,
    ES2022,
    ES2023,
    ESNext,
}

impl ScriptTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptTarget::ES3 => "ES3",
            ScriptTarget::ES5 => "ES5",
            ScriptTarget::ES2015 => "ES2015",
            ScriptTarget::ES2016 => "ES2016",
            ScriptTarget::ES2017 => "ES2017",
            ScriptTarget::ES2018 => "ES2018",
            ScriptTarget::ES2019 => "ES2019",
            ScriptTarget::ES2020 => "ES2020",
            ScriptTarget::ES2021 => "ES2021",
            ScriptTarget::ES2022 => "ES2022",
            ScriptTarget::ES2023 => "ES2023",
            ScriptTarget::ESNext => "ESNext",
        }
    }
}

impl TryFrom<String> for ScriptTarget {
    type Error = String;

    /// tsconfig values are case-insensitive; `ES6` is `ES2015`.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(match value.to_ascii_lowercase().as_str() {
            "es3" => ScriptTarget::ES3,
            "es5" => ScriptTarget::ES5,
            "es6" | "es2015" => ScriptTarget::ES2015,
            "es2016" => ScriptTarget::ES2016,
            "es2017" => ScriptTarget::ES2017,
            "es2018" => ScriptTarget::ES2018,
            "es2019" => ScriptTarget::ES2019,
            "es2020" => ScriptTarget::ES2020,
            "es2021" => ScriptTarget::ES2021,
            "es2022" => ScriptTarget::ES2022,
            "es2023" => ScriptTarget::ES2023,
            "esnext" | "latest" => ScriptTarget::ESNext,
            _ => return Err(format!("unknown target '{}'", value)),
        })
    }
}

impl From<ScriptTarget> for &'static str {
    fn from(target: ScriptTarget) -> Self {
        target.as_str()
    }
}

/// Module kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ModuleKind {
    None,
    CommonJS,
    AMD,
    UMD,
    System,
    ES2015,
    ES2020,
    ES2022,
    ESNext,
    Node16,
    NodeNext,
    Preserve,
}

impl ModuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::None => "None",
            ModuleKind::CommonJS => "CommonJS",
            ModuleKind::AMD => "AMD",
            ModuleKind::UMD => "UMD",
            ModuleKind::System => "System",
            ModuleKind::ES2015 => "ES2015",
            ModuleKind::ES2020 => "ES2020",
            ModuleKind::ES2022 => "ES2022",
            ModuleKind::ESNext => "ESNext",
            ModuleKind::Node16 => "Node16",
            ModuleKind::NodeNext => "NodeNext",
            ModuleKind::Preserve => "Preserve",
        }
    }

    /// ES2015 through ESNext.
    pub fn is_es_module(self) -> bool {
        matches!(
            self,
            ModuleKind::ES2015 | ModuleKind::ES2020 | ModuleKind::ES2022 | ModuleKind::ESNext
        )
    }

    /// Module kinds whose output may contain CommonJS.
    pub fn is_commonjs_containing(self) -> bool {
        matches!(
            self,
            ModuleKind::None | ModuleKind::CommonJS | ModuleKind::UMD | ModuleKind::Node16 | ModuleKind::NodeNext
        )
    }
}

impl TryFrom<String> for ModuleKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(match value.to_ascii_lowercase().as_str() {
            "none" => ModuleKind::None,
            "commonjs" => ModuleKind::CommonJS,
            "amd" => ModuleKind::AMD,
            "umd" => ModuleKind::UMD,
            "system" => ModuleKind::System,
            "es6" | "es2015" => ModuleKind::ES2015,
            "es2020" => ModuleKind::ES2020,
            "es2022" => ModuleKind::ES2022,
            "esnext" => ModuleKind::ESNext,
            "node16" => ModuleKind::Node16,
            "nodenext" => ModuleKind::NodeNext,
            "preserve" => ModuleKind::Preserve,
            _ => return Err(format!("unknown module kind '{}'", value)),
        })
    }
}

impl From<ModuleKind> for &'static str {
    fn from(kind: ModuleKind) -> Self {
        kind.as_str()
    }
}

// ============================================================================
// tsconfig.json
// ============================================================================

/// The tsconfig.json file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    #[serde(default)]
    pub compiler_options: CompilerOptions,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tsconfig.json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a tsconfig.json document.
pub fn parse_tsconfig(content: &str) -> Result<TsConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a tsconfig.json file.
pub fn load_tsconfig(path: &Path) -> Result<TsConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tsconfig(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_ordered() {
        assert!(ScriptTarget::ES3 < ScriptTarget::ES5);
        assert!(ScriptTarget::ES2022 < ScriptTarget::ESNext);
    }

    #[test]
    fn test_default_target_is_es5() {
        let options = CompilerOptions::default();
        assert_eq!(options.emit_script_target(), ScriptTarget::ES5);
        assert_eq!(options.emit_module_kind(), ModuleKind::CommonJS);
    }

    #[test]
    fn test_module_kind_follows_target() {
        let options = CompilerOptions {
            target: Some(ScriptTarget::ES2017),
            ..Default::default()
        };
        assert_eq!(options.emit_module_kind(), ModuleKind::ES2015);
    }
}
