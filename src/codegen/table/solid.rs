use super::{ImportTable, KindImports};
use crate::config::ValidationLibrary;
use crate::model::FieldKind;

const FOR: &str = "import { For } from 'solid-js'";

pub(super) static TABLE: ImportTable = ImportTable {
    form_package: "@tanstack/solid-form",
    kind_imports,
    validation,
    multi_step: &[
        "import type { stepSchemas } from \"./schema\"",
        "import { withFieldGroup } from \"@/components/ui/tanstack-form\"",
        "import { Progress } from '@/components/ui/progress'",
        "import { useFormStepper } from '@/hooks/use-stepper'",
        "import { Show } from 'solid-js'",
    ],
};

/// Solid has no date-fns binding in the registry, so the generated file
/// carries its own formatter.
const FORMAT_DATE_HELPER: &str = r#"
// Formats a date as "Month D, YYYY"
function formatDate(date: Date): string {
  const months = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"
  ];
  return `${months[date.getMonth()]} ${date.getDate()}, ${date.getFullYear()}`;
}"#;

const DATE_PICKER: &[&str] = &[
    "import { Popover, PopoverContent, PopoverTrigger } from \"@/components/ui/popover\"",
    "import { cx } from \"@/utils/utils\"",
    "import { Calendar } from \"@/components/ui/calender\"",
    "import { Calendar as CalendarIcon } from \"lucide-solid\"",
    "import { Button } from \"@/components/ui/button\"",
    FORMAT_DATE_HELPER,
];

const OTP: &[&str] = &[
    "import {\n\tOTPField,\n\tOTPFieldGroup,\n\tOTPFieldInput,\n\tOTPFieldSeparator,\n\tOTPFieldSlot,\n} from \"@/components/ui/input-otp\"",
];

const SELECT: &[&str] = &[
    "import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from \"@/components/ui/select\"",
];

const MULTI_SELECT: &[&str] = &[
    "import {\n\tMultiSelect,\n\tMultiSelectContent,\n\tMultiSelectItem,\n\tMultiSelectList,\n\tMultiSelectSearch,\n\tMultiSelectTrigger,\n\tMultiSelectValue,\n} from \"@/components/ui/multi-select\"",
    super::MULTI_SELECT_NOTE,
    FOR,
];

const PASSWORD: &[&str] = &[
    "import { InputGroup, InputGroupAddon, InputGroupInput } from '@/components/ui/input-group'",
    "import { Eye, EyeOff } from 'lucide-solid'",
    "import { createSignal, Show } from 'solid-js'",
];

const RADIO_GROUP: &[&str] = &[
    "import {\n\tRadioGroup,\n\tRadioGroupItem,\n\tRadioGroupItemControl,\n\tRadioGroupItemIndicator,\n\tRadioGroupItemInput,\n\tRadioGroupItemLabel,\n} from \"@/components/ui/radio-group\"",
    FOR,
];

const TOGGLE_GROUP: &[&str] = &[
    "import { ToggleGroup, ToggleGroupItem } from '@/components/ui/toggle-group'",
    FOR,
];

const FORM_ARRAY: &[&str] = &[
    "import { Separator } from \"@/components/ui/separator\"",
    "import { Plus, Trash2 } from \"lucide-solid\"",
    FOR,
];

fn kind_imports(kind: FieldKind) -> KindImports {
    match kind {
        FieldKind::DatePicker => KindImports::Fixed(DATE_PICKER),
        FieldKind::Otp => KindImports::Fixed(OTP),
        FieldKind::Select => KindImports::Fixed(SELECT),
        FieldKind::MultiSelect => KindImports::Fixed(MULTI_SELECT),
        FieldKind::Password => KindImports::Fixed(PASSWORD),
        FieldKind::RadioGroup => KindImports::Fixed(RADIO_GROUP),
        FieldKind::ToggleGroup => KindImports::Fixed(TOGGLE_GROUP),
        FieldKind::FormArray => KindImports::Fixed(FORM_ARRAY),
        // Solid renders descriptions and legends with plain markup
        FieldKind::H1
        | FieldKind::H2
        | FieldKind::H3
        | FieldKind::FieldDescription
        | FieldKind::FieldLegend => KindImports::Nothing,
        FieldKind::Separator
        | FieldKind::Input
        | FieldKind::Textarea
        | FieldKind::Checkbox
        | FieldKind::Switch
        | FieldKind::Slider => KindImports::Component,
    }
}

fn validation(library: ValidationLibrary) -> &'static str {
    match library {
        ValidationLibrary::Zod => "import * as z from \"zod\"",
        ValidationLibrary::Valibot => "import { valibotSchema } from \"valibot\"",
        ValidationLibrary::Arktype => "import { type } from \"arktype\"",
    }
}
