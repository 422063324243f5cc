//! Form-builder records, steps and layout

use super::element::{flatten, ElementOrRow, FormElement};
use super::ModelError;
use crate::config::{FormBuilderSettings, MAX_ASYNC_VALIDATION_MS};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One page of a multi-step form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStep {
    pub id: String,
    #[serde(default)]
    pub step_fields: Vec<ElementOrRow>,
}

/// Top-level arrangement of a form: plain elements or steps, never both
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormLayout {
    Elements(Vec<ElementOrRow>),
    Steps(Vec<FormStep>),
}

// A layout is stepped as soon as any item carries `stepFields`
impl<'de> Deserialize<'de> for FormLayout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<Value>::deserialize(deserializer)?;
        let stepped = items.iter().any(|item| item.get("stepFields").is_some());
        let layout = if stepped {
            serde_json::from_value(Value::Array(items)).map(FormLayout::Steps)
        } else {
            serde_json::from_value(Value::Array(items)).map(FormLayout::Elements)
        };
        layout.map_err(serde::de::Error::custom)
    }
}

impl Default for FormLayout {
    fn default() -> Self {
        FormLayout::Elements(Vec::new())
    }
}

impl FormLayout {
    /// Top-level element-or-row items across every step, in order
    pub fn items(&self) -> Vec<&ElementOrRow> {
        match self {
            FormLayout::Elements(items) => items.iter().collect(),
            FormLayout::Steps(steps) => steps.iter().flat_map(|s| s.step_fields.iter()).collect(),
        }
    }

    /// Every top-level element with rows collapsed
    pub fn elements(&self) -> Vec<&FormElement> {
        match self {
            FormLayout::Elements(items) => flatten(items),
            FormLayout::Steps(steps) => steps
                .iter()
                .flat_map(|s| flatten(&s.step_fields))
                .collect(),
        }
    }

    pub fn step_count(&self) -> usize {
        match self {
            FormLayout::Elements(_) => 0,
            FormLayout::Steps(steps) => steps.len(),
        }
    }
}

fn default_form_name() -> String {
    "draft".to_string()
}

fn default_schema_name() -> String {
    "draftFormSchema".to_string()
}

/// A saved form, as persisted by the builder under its numeric id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormBuilder {
    pub id: u64,
    #[serde(default = "default_form_name")]
    pub form_name: String,
    #[serde(default = "default_schema_name")]
    pub schema_name: String,
    #[serde(rename = "isMS", default)]
    pub is_multi_step: bool,
    #[serde(default)]
    pub form_elements: FormLayout,
    #[serde(default)]
    pub settings: FormBuilderSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_added_step_index: Option<usize>,
}

impl FormBuilder {
    /// Parse and validate a record
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let form: FormBuilder = serde_json::from_str(json)?;
        form.validate()?;
        Ok(form)
    }

    /// Read, parse and validate a record stored on disk
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let form = Self::from_json(&content)?;
        tracing::debug!(
            "Loaded form {} ({}) with {} top-level elements in {} steps",
            form.id,
            form.form_name,
            form.form_elements.elements().len(),
            form.form_elements.step_count()
        );
        Ok(form)
    }

    /// Every id in the tree must be unique and settings within bounds
    pub fn validate(&self) -> Result<(), ModelError> {
        let debounce = self.settings.async_validation;
        if debounce > MAX_ASYNC_VALIDATION_MS {
            return Err(ModelError::AsyncValidationOutOfRange {
                value: debounce,
                max: MAX_ASYNC_VALIDATION_MS,
            });
        }

        let mut seen = HashSet::new();
        match &self.form_elements {
            FormLayout::Elements(items) => collect_ids(items, &mut seen)?,
            FormLayout::Steps(steps) => {
                for step in steps {
                    claim(&step.id, &mut seen)?;
                    collect_ids(&step.step_fields, &mut seen)?;
                }
            }
        }
        Ok(())
    }
}

fn claim<'a>(id: &'a str, seen: &mut HashSet<&'a str>) -> Result<(), ModelError> {
    if !seen.insert(id) {
        return Err(ModelError::DuplicateId(id.to_string()));
    }
    Ok(())
}

fn collect_ids<'a>(items: &'a [ElementOrRow], seen: &mut HashSet<&'a str>) -> Result<(), ModelError> {
    for element in flatten(items) {
        claim(element.id(), seen)?;
        if let FormElement::FormArray(array) = element {
            collect_ids(&array.array_field, seen)?;
            for entry in &array.entries {
                claim(&entry.id, seen)?;
                collect_ids(&entry.fields, seen)?;
            }
        }
    }
    Ok(())
}
