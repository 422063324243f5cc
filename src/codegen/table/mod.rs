//! Fixed import tables, one per generation target
//!
//! Each table maps a field kind to the statements its rendered widget needs.
//! Kinds without a curated bundle fall back to a component named after the
//! kind.

mod react;
mod solid;

use super::Framework;
use crate::config::ValidationLibrary;
use crate::model::FieldKind;

/// Module every static field block is imported from
pub const FIELD_MODULE: &str = "@/components/ui/field";

/// Order of symbols inside the composed field statement
pub const FIELD_PART_ORDER: [&str; 3] = ["FieldDescription", "FieldLegend", "FieldSeparator"];

/// Multi-select ships outside the base component set and must be vendored
pub const MULTI_SELECT_NOTE: &str = "\n// IMPORTANT: multi-select is not a shadcn component, copy it from the source and install its dependencies. GitHub: https://github.com/Ali-Hussein-dev/formcn/blob/main/apps/web/src/components/ui/multi-select.tsx";

/// What a single field kind contributes to the import set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindImports {
    /// Relies on the baseline statements only
    Nothing,
    Fixed(&'static [&'static str]),
    /// Symbols merged into one statement importing from [`FIELD_MODULE`]
    FieldParts(&'static [&'static str]),
    /// `import { Kind } from "@/components/ui/kind"`
    Component,
}

pub struct ImportTable {
    /// Package that provides `revalidateLogic` for this framework
    pub form_package: &'static str,
    pub kind_imports: fn(FieldKind) -> KindImports,
    pub validation: fn(ValidationLibrary) -> &'static str,
    /// Added once for multi-step forms
    pub multi_step: &'static [&'static str],
}

impl ImportTable {
    pub fn for_framework(framework: Framework) -> &'static ImportTable {
        match framework {
            Framework::React => &react::TABLE,
            Framework::Solid => &solid::TABLE,
        }
    }

    /// Statements for a kind, with fallbacks and field parts rendered
    pub fn statements_for(&self, kind: FieldKind) -> Vec<String> {
        match (self.kind_imports)(kind) {
            KindImports::Nothing => Vec::new(),
            KindImports::Fixed(statements) => statements.iter().map(|s| s.to_string()).collect(),
            KindImports::FieldParts(parts) => vec![field_statement(parts.iter().copied())],
            KindImports::Component => vec![component_statement(kind)],
        }
    }
}

/// `import { Kind } from "@/components/ui/kind"`
pub fn component_statement(kind: FieldKind) -> String {
    let name = kind.as_str();
    format!(
        "import {{ {name} }} from \"@/components/ui/{}\"",
        name.to_lowercase()
    )
}

/// One statement importing the given field symbols in canonical order
pub fn field_statement<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let wanted: Vec<&str> = parts.into_iter().collect();
    let symbols: Vec<&str> = FIELD_PART_ORDER
        .iter()
        .copied()
        .filter(|symbol| wanted.contains(symbol))
        .collect();
    format!("import {{ {} }} from \"{FIELD_MODULE}\"", symbols.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TARGETS: [Framework; 2] = [Framework::React, Framework::Solid];

    #[test]
    fn test_component_statement_lowercases_path() {
        assert_eq!(
            component_statement(FieldKind::Checkbox),
            "import { Checkbox } from \"@/components/ui/checkbox\""
        );
    }

    #[test]
    fn test_field_statement_uses_canonical_order() {
        assert_eq!(
            field_statement(["FieldSeparator", "FieldLegend", "FieldDescription"]),
            "import { FieldDescription, FieldLegend, FieldSeparator } from \"@/components/ui/field\""
        );
    }

    #[test]
    fn test_headings_contribute_nothing() {
        for framework in TARGETS {
            let table = ImportTable::for_framework(framework);
            for kind in [FieldKind::H1, FieldKind::H2, FieldKind::H3] {
                assert!(table.statements_for(kind).is_empty(), "{framework:?} {kind}");
            }
        }
    }

    #[test]
    fn test_plain_inputs_fall_back_to_component() {
        for framework in TARGETS {
            let table = ImportTable::for_framework(framework);
            for kind in [
                FieldKind::Input,
                FieldKind::Textarea,
                FieldKind::Checkbox,
                FieldKind::Switch,
                FieldKind::Slider,
            ] {
                assert_eq!(table.statements_for(kind), vec![component_statement(kind)]);
            }
        }
    }

    #[test]
    fn test_react_static_field_blocks_use_field_parts() {
        let table = ImportTable::for_framework(Framework::React);
        assert_eq!(
            (table.kind_imports)(FieldKind::Separator),
            KindImports::FieldParts(&["FieldSeparator"])
        );
        for kind in [FieldKind::FieldDescription, FieldKind::FieldLegend] {
            assert_eq!(
                (table.kind_imports)(kind),
                KindImports::FieldParts(&["FieldDescription", "FieldLegend"])
            );
        }
    }

    #[test]
    fn test_solid_static_field_blocks() {
        let table = ImportTable::for_framework(Framework::Solid);
        assert!(table.statements_for(FieldKind::FieldDescription).is_empty());
        assert!(table.statements_for(FieldKind::FieldLegend).is_empty());
        assert_eq!(
            table.statements_for(FieldKind::Separator),
            vec!["import { Separator } from \"@/components/ui/separator\""]
        );
    }

    #[test]
    fn test_every_interactive_kind_imports_something() {
        for framework in TARGETS {
            let table = ImportTable::for_framework(framework);
            for kind in FieldKind::ALL.iter().filter(|k| !k.is_static()) {
                assert!(
                    !table.statements_for(*kind).is_empty(),
                    "{framework:?} has no imports for {kind}"
                );
            }
        }
    }

    #[test]
    fn test_validation_statements_are_distinct() {
        for framework in TARGETS {
            let table = ImportTable::for_framework(framework);
            let zod = (table.validation)(ValidationLibrary::Zod);
            let valibot = (table.validation)(ValidationLibrary::Valibot);
            let arktype = (table.validation)(ValidationLibrary::Arktype);
            assert_eq!(zod, "import * as z from \"zod\"");
            assert_ne!(zod, valibot);
            assert_ne!(valibot, arktype);
        }
    }

    #[test]
    fn test_valibot_statement_per_framework() {
        let react = ImportTable::for_framework(Framework::React);
        let solid = ImportTable::for_framework(Framework::Solid);
        assert_eq!(
            (react.validation)(ValidationLibrary::Valibot),
            "import * as v from \"valibot\""
        );
        assert_eq!(
            (solid.validation)(ValidationLibrary::Valibot),
            "import { valibotSchema } from \"valibot\""
        );
    }

    #[test]
    fn test_multi_step_statements() {
        let react = ImportTable::for_framework(Framework::React);
        assert_eq!(react.multi_step.len(), 4);
        assert!(react
            .multi_step
            .iter()
            .any(|s| s.contains("useFormStepper")));

        let solid = ImportTable::for_framework(Framework::Solid);
        assert_eq!(solid.multi_step.len(), 5);
        assert!(solid.multi_step.contains(&"import { Show } from 'solid-js'"));
    }

    #[test]
    fn test_tables_use_their_own_icon_package() {
        let react = ImportTable::for_framework(Framework::React).statements_for(FieldKind::Password);
        let solid = ImportTable::for_framework(Framework::Solid).statements_for(FieldKind::Password);
        assert!(react.iter().any(|s| s.contains("lucide-react")));
        assert!(solid.iter().any(|s| s.contains("lucide-solid")));
        assert!(solid.iter().any(|s| s.contains("createSignal")));
    }
}
