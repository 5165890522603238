//! Feature-test macro status page (SD-6).
//!
//! `macros.yaml` lists the language, library and attribute macros, each
//! with one or more `values` entries naming the papers that introduced
//! them. The page itself comes from a Jinja template that receives the
//! macros grouped by value and the reduced reference index.

use std::collections::BTreeMap;

use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::references::ReferenceIndex;

#[derive(Debug, Error)]
pub enum Sd6Error {
    #[error("Failed to parse feature-test macros: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Macro {name} has no `values` list")]
    MissingValues { name: String },

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Papers and status behind one value of a macro.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MacroValue {
    pub papers: Vec<String>,
    pub feature: String,
    pub removed: bool,
}

/// A macro with its values keyed by the value itself (`201603`).
///
/// Keys other than `name` and `values` are passed through to the template
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureMacro {
    pub name: String,
    pub value: BTreeMap<u64, MacroValue>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureMacros {
    pub language: Vec<FeatureMacro>,
    pub library: Vec<FeatureMacro>,
    pub attributes: Vec<FeatureMacro>,
}

#[derive(Debug, Deserialize)]
struct MacroFile {
    language: Vec<RawMacro>,
    library: Vec<RawMacro>,
    attributes: Vec<RawMacro>,
}

#[derive(Debug, Deserialize)]
struct RawMacro {
    name: String,
    values: Option<Vec<RawValue>>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Deserialize)]
struct RawValue {
    value: u64,
    #[serde(default)]
    papers: Option<String>,
    #[serde(default)]
    feature: Option<String>,
    #[serde(default)]
    removed: bool,
}

impl FeatureMacros {
    pub fn from_yaml(yaml: &str) -> Result<Self, Sd6Error> {
        let file: MacroFile = serde_yaml::from_str(yaml)?;
        Ok(Self {
            language: group_values(file.language)?,
            library: group_values(file.library)?,
            attributes: group_values(file.attributes)?,
        })
    }

    /// Renders the status page from a Jinja `template`.
    ///
    /// The template sees `lang_macros`, `lib_macros`, `attr_macros` and
    /// `refs` (paper id to title or index entry).
    pub fn render(&self, template: &str, refs: &ReferenceIndex) -> Result<String, Sd6Error> {
        let mut env = Environment::new();
        env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
        env.add_template("sd6", template)?;
        let page = env.get_template("sd6")?.render(context! {
            lang_macros => &self.language,
            lib_macros => &self.library,
            attr_macros => &self.attributes,
            refs => refs,
        })?;
        log::debug!(
            "rendered {} language, {} library and {} attribute macros",
            self.language.len(),
            self.library.len(),
            self.attributes.len()
        );
        Ok(page)
    }
}

/// Replaces each macro's `values` list with a map from value to papers,
/// sorted by macro name.
fn group_values(macros: Vec<RawMacro>) -> Result<Vec<FeatureMacro>, Sd6Error> {
    let mut grouped = macros
        .into_iter()
        .map(|raw| {
            let Some(values) = raw.values else {
                return Err(Sd6Error::MissingValues { name: raw.name });
            };
            let value = values
                .into_iter()
                .map(|v| {
                    let papers = v
                        .papers
                        .as_deref()
                        .map(|papers| papers.split_whitespace().map(String::from).collect())
                        .unwrap_or_default();
                    (
                        v.value,
                        MacroValue {
                            papers,
                            feature: v.feature.unwrap_or_default(),
                            removed: v.removed,
                        },
                    )
                })
                .collect();
            Ok(FeatureMacro {
                name: raw.name,
                value,
                extra: raw.extra,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    grouped.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(grouped)
}
