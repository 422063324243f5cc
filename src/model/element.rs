//! Form element value objects
//!
//! Elements are persisted as JSON objects tagged by `fieldType`, so the enum
//! below is internally tagged and every attribute uses the builder's
//! camelCase spelling.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Every kind of element the builder can place on a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Input,
    Password,
    Otp,
    Textarea,
    Checkbox,
    RadioGroup,
    ToggleGroup,
    Switch,
    Slider,
    Select,
    MultiSelect,
    DatePicker,
    H1,
    H2,
    H3,
    Separator,
    FieldDescription,
    FieldLegend,
    FormArray,
}

impl FieldKind {
    pub const ALL: [FieldKind; 19] = [
        Self::Input,
        Self::Password,
        Self::Otp,
        Self::Textarea,
        Self::Checkbox,
        Self::RadioGroup,
        Self::ToggleGroup,
        Self::Switch,
        Self::Slider,
        Self::Select,
        Self::MultiSelect,
        Self::DatePicker,
        Self::H1,
        Self::H2,
        Self::H3,
        Self::Separator,
        Self::FieldDescription,
        Self::FieldLegend,
        Self::FormArray,
    ];

    /// The `fieldType` tag as written by the builder
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Password => "Password",
            Self::Otp => "OTP",
            Self::Textarea => "Textarea",
            Self::Checkbox => "Checkbox",
            Self::RadioGroup => "RadioGroup",
            Self::ToggleGroup => "ToggleGroup",
            Self::Switch => "Switch",
            Self::Slider => "Slider",
            Self::Select => "Select",
            Self::MultiSelect => "MultiSelect",
            Self::DatePicker => "DatePicker",
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::Separator => "Separator",
            Self::FieldDescription => "FieldDescription",
            Self::FieldLegend => "FieldLegend",
            Self::FormArray => "FormArray",
        }
    }

    /// Static blocks render content only and never hold a value
    pub fn is_static(&self) -> bool {
        matches!(
            self,
            Self::H1
                | Self::H2
                | Self::H3
                | Self::Separator
                | Self::FieldDescription
                | Self::FieldLegend
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable `{value, label}` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Default value of an interactive field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Attributes shared by every interactive field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldProps {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

/// Input and Password fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextField {
    #[serde(flatten)]
    pub props: FieldProps,
    /// HTML input type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
}

/// OTP, Textarea and DatePicker carry only the shared attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlainField {
    #[serde(flatten)]
    pub props: FieldProps,
}

/// Checkbox and Switch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToggleField {
    #[serde(flatten)]
    pub props: FieldProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// RadioGroup, Select and MultiSelect
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceField {
    #[serde(flatten)]
    pub props: FieldProps,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleMode {
    #[default]
    Single,
    Multiple,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToggleGroupField {
    #[serde(flatten)]
    pub props: FieldProps,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    #[serde(rename = "type", default)]
    pub mode: ToggleMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliderField {
    #[serde(flatten)]
    pub props: FieldProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Current value, one entry per thumb
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<f64>>,
}

/// Headings, separators, descriptions and legends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticBlock {
    pub id: String,
    pub name: String,
    #[serde(rename = "static", default = "static_marker")]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn static_marker() -> bool {
    true
}

/// One concrete repetition of a form array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormArrayEntry {
    pub id: String,
    #[serde(default)]
    pub fields: Vec<ElementOrRow>,
}

/// Repeatable group of elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormArray {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Shape of a single entry
    #[serde(default)]
    pub array_field: Vec<ElementOrRow>,
    #[serde(default)]
    pub entries: Vec<FormArrayEntry>,
}

/// A single field, static block or repeatable group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fieldType")]
pub enum FormElement {
    Input(TextField),
    Password(TextField),
    #[serde(rename = "OTP")]
    Otp(PlainField),
    Textarea(PlainField),
    Checkbox(ToggleField),
    RadioGroup(ChoiceField),
    ToggleGroup(ToggleGroupField),
    Switch(ToggleField),
    Slider(SliderField),
    Select(ChoiceField),
    MultiSelect(ChoiceField),
    DatePicker(PlainField),
    H1(StaticBlock),
    H2(StaticBlock),
    H3(StaticBlock),
    Separator(StaticBlock),
    FieldDescription(StaticBlock),
    FieldLegend(StaticBlock),
    FormArray(FormArray),
}

impl FormElement {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Input(_) => FieldKind::Input,
            Self::Password(_) => FieldKind::Password,
            Self::Otp(_) => FieldKind::Otp,
            Self::Textarea(_) => FieldKind::Textarea,
            Self::Checkbox(_) => FieldKind::Checkbox,
            Self::RadioGroup(_) => FieldKind::RadioGroup,
            Self::ToggleGroup(_) => FieldKind::ToggleGroup,
            Self::Switch(_) => FieldKind::Switch,
            Self::Slider(_) => FieldKind::Slider,
            Self::Select(_) => FieldKind::Select,
            Self::MultiSelect(_) => FieldKind::MultiSelect,
            Self::DatePicker(_) => FieldKind::DatePicker,
            Self::H1(_) => FieldKind::H1,
            Self::H2(_) => FieldKind::H2,
            Self::H3(_) => FieldKind::H3,
            Self::Separator(_) => FieldKind::Separator,
            Self::FieldDescription(_) => FieldKind::FieldDescription,
            Self::FieldLegend(_) => FieldKind::FieldLegend,
            Self::FormArray(_) => FieldKind::FormArray,
        }
    }

    /// Shared attributes, `None` for static blocks and arrays
    pub fn props(&self) -> Option<&FieldProps> {
        match self {
            Self::Input(f) | Self::Password(f) => Some(&f.props),
            Self::Otp(f) | Self::Textarea(f) | Self::DatePicker(f) => Some(&f.props),
            Self::Checkbox(f) | Self::Switch(f) => Some(&f.props),
            Self::RadioGroup(f) | Self::Select(f) | Self::MultiSelect(f) => Some(&f.props),
            Self::ToggleGroup(f) => Some(&f.props),
            Self::Slider(f) => Some(&f.props),
            Self::H1(_)
            | Self::H2(_)
            | Self::H3(_)
            | Self::Separator(_)
            | Self::FieldDescription(_)
            | Self::FieldLegend(_)
            | Self::FormArray(_) => None,
        }
    }

    fn static_block(&self) -> Option<&StaticBlock> {
        match self {
            Self::H1(b)
            | Self::H2(b)
            | Self::H3(b)
            | Self::Separator(b)
            | Self::FieldDescription(b)
            | Self::FieldLegend(b) => Some(b),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        if let Self::FormArray(array) = self {
            return &array.id;
        }
        match (self.props(), self.static_block()) {
            (Some(props), _) => &props.id,
            (None, Some(block)) => &block.id,
            (None, None) => "",
        }
    }

    /// Template of a form array, `None` for every other element
    pub fn array_template(&self) -> Option<&[ElementOrRow]> {
        match self {
            Self::FormArray(array) => Some(&array.array_field),
            _ => None,
        }
    }
}

/// One element, or several laid out side by side
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElementOrRow {
    Single(FormElement),
    Row(Vec<FormElement>),
}

// Picks the shape up front so a bad element reports its own error
impl<'de> Deserialize<'de> for ElementOrRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let item = if value.is_array() {
            serde_json::from_value(value).map(ElementOrRow::Row)
        } else {
            serde_json::from_value(value).map(ElementOrRow::Single)
        };
        item.map_err(serde::de::Error::custom)
    }
}

impl From<FormElement> for ElementOrRow {
    fn from(element: FormElement) -> Self {
        ElementOrRow::Single(element)
    }
}

/// Collapse rows one level so every element appears once, in order
pub fn flatten(items: &[ElementOrRow]) -> Vec<&FormElement> {
    let mut flat = Vec::with_capacity(items.len());
    for item in items {
        match item {
            ElementOrRow::Single(element) => flat.push(element),
            ElementOrRow::Row(row) => flat.extend(row.iter()),
        }
    }
    flat
}
