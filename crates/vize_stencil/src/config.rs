//! Rule options and resolved settings.
//!
//! Options come from two places, mirroring how Tailwind lint rules are usually
//! configured: rule-level `options` and plugin-wide shared `settings`. A rule
//! option wins over a shared setting, which wins over the built-in default.
//!
//! ```json
//! {
//!   "severity": "warning",
//!   "settings": { "callees": ["clsx", "ctl"], "config": "tailwind.config.js" },
//!   "options": { "tags": ["tw"] }
//! }
//! ```

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::diagnostic::Severity;

/// Default pattern for class-bearing attribute names.
pub const DEFAULT_CLASS_REGEX: &str = "^class(Name)?$";

/// Default Tailwind configuration path.
pub const DEFAULT_TAILWIND_CONFIG: &str = "tailwind.config.js";

/// Default configuration file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "stencil.config.json";

/// Errors raised while loading or resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for the expected shape.
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// `classRegex` does not compile.
    #[error("Invalid classRegex `{pattern}`: {source}")]
    InvalidClassRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A name list contains the same entry twice.
    #[error("Duplicate entry `{name}` in `{option}`")]
    DuplicateName { option: &'static str, name: String },
}

/// Tailwind configuration reference: a path or an inline object.
///
/// Accepted and kept for tooling, never read while classifying.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TailwindConfig {
    Path(String),
    Inline(serde_json::Map<String, serde_json::Value>),
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self::Path(DEFAULT_TAILWIND_CONFIG.to_string())
    }
}

/// Raw options for the rule. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleOptions {
    /// Function names whose arguments are class names (e.g. `["clsx", "ctl"]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callees: Option<Vec<String>>,

    /// Tagged template names whose body is a class list (e.g. `["tw"]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Regex matched against attribute names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_regex: Option<String>,

    /// Tailwind configuration path or inline object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TailwindConfig>,
}

/// Contents of `stencil.config.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StencilConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Severity for reported template expressions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Shared settings, used when an option is not set on the rule.
    #[serde(default)]
    pub settings: RuleOptions,

    /// Rule-level options.
    #[serde(default)]
    pub options: RuleOptions,
}

impl StencilConfig {
    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_json(&content)
    }

    /// Load `stencil.config.json` from `dir` if present, otherwise defaults.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Resolve into immutable settings.
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        Settings::resolve(&self.options, &self.settings)
    }
}

/// Resolved, validated settings for one lint session.
#[derive(Debug, Clone)]
pub struct Settings {
    callees: FxHashSet<CompactString>,
    tags: FxHashSet<CompactString>,
    class_regex: Regex,
    config: TailwindConfig,
}

impl Settings {
    /// Resolve rule options against shared settings and defaults.
    pub fn resolve(options: &RuleOptions, shared: &RuleOptions) -> Result<Self, ConfigError> {
        let callees = name_set(
            "callees",
            options.callees.as_deref().or(shared.callees.as_deref()),
        )?;
        let tags = name_set("tags", options.tags.as_deref().or(shared.tags.as_deref()))?;

        let pattern = options
            .class_regex
            .as_deref()
            .or(shared.class_regex.as_deref())
            .unwrap_or(DEFAULT_CLASS_REGEX);
        let class_regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidClassRegex {
            pattern: pattern.to_string(),
            source,
        })?;

        let config = options
            .config
            .clone()
            .or_else(|| shared.config.clone())
            .unwrap_or_default();

        Ok(Self {
            callees,
            tags,
            class_regex,
            config,
        })
    }

    /// Replace the recognized callee names.
    pub fn with_callees<I, S>(mut self, callees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.callees = callees.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the recognized tag names.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn is_callee(&self, name: &str) -> bool {
        self.callees.contains(name)
    }

    #[inline]
    pub fn is_tag(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    /// Whether an attribute name carries class names.
    #[inline]
    pub fn is_class_attribute(&self, name: &str) -> bool {
        self.class_regex.is_match(name)
    }

    /// Tailwind configuration reference (not used by classification).
    #[inline]
    pub fn config(&self) -> &TailwindConfig {
        &self.config
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            callees: FxHashSet::default(),
            tags: FxHashSet::default(),
            class_regex: Regex::new(DEFAULT_CLASS_REGEX).expect("default class regex is valid"),
            config: TailwindConfig::default(),
        }
    }
}

fn name_set(
    option: &'static str,
    names: Option<&[String]>,
) -> Result<FxHashSet<CompactString>, ConfigError> {
    let mut set = FxHashSet::default();
    for name in names.unwrap_or_default() {
        if !set.insert(CompactString::new(name)) {
            return Err(ConfigError::DuplicateName {
                option,
                name: name.clone(),
            });
        }
    }
    Ok(set)
}

/// JSON Schema for `stencil.config.json`.
pub const STENCIL_CONFIG_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Stencil Configuration",
  "description": "Configuration for the no-template-expression class name rule",
  "type": "object",
  "definitions": {
    "ruleOptions": {
      "type": "object",
      "properties": {
        "callees": {
          "type": "array",
          "items": { "type": "string", "minLength": 0 },
          "uniqueItems": true
        },
        "config": {
          "default": "tailwind.config.js",
          "type": ["string", "object"]
        },
        "tags": {
          "type": "array",
          "items": { "type": "string", "minLength": 0 },
          "uniqueItems": true
        },
        "classRegex": {
          "type": "string",
          "default": "^class(Name)?$"
        }
      },
      "additionalProperties": false
    }
  },
  "properties": {
    "$schema": { "type": "string" },
    "severity": { "enum": ["error", "warning"] },
    "settings": { "$ref": "#/definitions/ruleOptions" },
    "options": { "$ref": "#/definitions/ruleOptions" }
  },
  "additionalProperties": false
}"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.is_callee("clsx"));
        assert!(!settings.is_tag("tw"));
        assert!(settings.is_class_attribute("class"));
        assert!(settings.is_class_attribute("className"));
        assert!(!settings.is_class_attribute("classList"));
        assert!(!settings.is_class_attribute("style"));
        assert_eq!(
            settings.config(),
            &TailwindConfig::Path("tailwind.config.js".to_string())
        );
    }

    #[test]
    fn test_rule_option_wins_over_shared() {
        let config = StencilConfig::from_json(
            r#"{
                "settings": { "callees": ["clsx"], "tags": ["tw"] },
                "options": { "callees": ["ctl"] }
            }"#,
        )
        .unwrap();
        let settings = config.resolve().unwrap();
        assert!(settings.is_callee("ctl"));
        assert!(!settings.is_callee("clsx"));
        assert!(settings.is_tag("tw"));
    }

    #[test]
    fn test_inline_tailwind_config() {
        let config =
            StencilConfig::from_json(r#"{ "options": { "config": { "prefix": "tw-" } } }"#)
                .unwrap();
        let settings = config.resolve().unwrap();
        assert!(matches!(settings.config(), TailwindConfig::Inline(map) if map.contains_key("prefix")));
    }

    #[test]
    fn test_custom_class_regex() {
        let options = RuleOptions {
            class_regex: Some("^(class|klass)$".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(&options, &RuleOptions::default()).unwrap();
        assert!(settings.is_class_attribute("klass"));
        assert!(!settings.is_class_attribute("className"));
    }

    #[test]
    fn test_duplicate_callee_rejected() {
        let options = RuleOptions {
            callees: Some(vec!["cn".to_string(), "cn".to_string()]),
            ..Default::default()
        };
        let err = Settings::resolve(&options, &RuleOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateName { option: "callees", .. }));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let options = RuleOptions {
            class_regex: Some("(".to_string()),
            ..Default::default()
        };
        let err = Settings::resolve(&options, &RuleOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid classRegex"));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = StencilConfig::from_json(r#"{ "options": { "calees": [] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_severity_option() {
        let config = StencilConfig::from_json(r#"{ "severity": "error" }"#).unwrap();
        assert_eq!(config.severity, Some(Severity::Error));
    }

    #[test]
    fn test_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(STENCIL_CONFIG_SCHEMA).unwrap();
        assert_eq!(schema["title"], "Stencil Configuration");
        assert_eq!(schema["properties"]["options"]["$ref"], "#/definitions/ruleOptions");
        assert!(schema["definitions"]["ruleOptions"]["properties"]["callees"].is_object());
    }
}
