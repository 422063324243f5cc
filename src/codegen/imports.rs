//! Import statement generation for exported form code

use super::import_set::ImportSet;
use super::table::{component_statement, field_statement, ImportTable, KindImports};
use super::Framework;
use crate::config::ValidationLibrary;
use crate::model::{flatten, ElementOrRow, FormElement};

/// Statements every generated form starts with
fn baseline(table: &ImportTable, is_multi_step: bool, schema_name: &str) -> [String; 4] {
    let schema_symbols = if is_multi_step {
        format!("{schema_name}, {schema_name}Steps")
    } else {
        schema_name.to_string()
    };
    [
        format!("import {{ {schema_symbols} }} from '@/lib/{schema_name}'"),
        "import { useAppForm } from \"@/components/ui/tanstack-form\"".to_string(),
        format!("import {{ revalidateLogic }} from \"{}\"", table.form_package),
        "import { toast } from \"sonner\"".to_string(),
    ]
}

/// Collect the import statements needed by the code generated for a form
///
/// Rows are flattened one level and every element is visited once. Form
/// arrays contribute their own bundle plus that of every element in their
/// template; concrete entries are assumed to match the template and are not
/// visited.
pub fn generate_imports<'a, I>(
    framework: Framework,
    form_elements: I,
    validation: Option<ValidationLibrary>,
    is_multi_step: bool,
    schema_name: &str,
) -> ImportSet
where
    I: IntoIterator<Item = &'a ElementOrRow>,
{
    let table = ImportTable::for_framework(framework);
    let mut imports = ImportSet::new();
    imports.extend(baseline(table, is_multi_step, schema_name));

    let mut field_parts: Vec<&'static str> = Vec::new();
    let mut visited = 0usize;
    for item in form_elements {
        let row: &[FormElement] = match item {
            ElementOrRow::Single(element) => std::slice::from_ref(element),
            ElementOrRow::Row(row) => row,
        };
        for element in row {
            visited += visit(element, table, &mut imports, &mut field_parts);
        }
    }

    if !field_parts.is_empty() {
        imports.insert(field_statement(field_parts));
    }

    match validation {
        Some(library) => {
            imports.insert((table.validation)(library));
        }
        None => tracing::debug!("No supported validation library, skipping schema import"),
    }

    if is_multi_step {
        imports.extend(table.multi_step.iter().copied());
    }

    tracing::debug!(
        "Generated {} import statements for {visited} elements ({framework:?})",
        imports.len()
    );
    imports
}

/// Add one element's statements, descending into array templates
fn visit(
    element: &FormElement,
    table: &ImportTable,
    imports: &mut ImportSet,
    field_parts: &mut Vec<&'static str>,
) -> usize {
    let kind = element.kind();
    match (table.kind_imports)(kind) {
        KindImports::Nothing => {}
        KindImports::Fixed(statements) => imports.extend(statements.iter().copied()),
        KindImports::FieldParts(parts) => field_parts.extend(parts.iter().copied()),
        KindImports::Component => {
            imports.insert(component_statement(kind));
        }
    }

    let mut visited = 1;
    if let Some(template) = element.array_template() {
        for nested in flatten(template) {
            visited += visit(nested, table, imports, field_parts);
        }
    }
    visited
}
