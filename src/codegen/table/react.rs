use super::{ImportTable, KindImports};
use crate::config::ValidationLibrary;
use crate::model::FieldKind;

pub(super) static TABLE: ImportTable = ImportTable {
    form_package: "@tanstack/react-form",
    kind_imports,
    validation,
    multi_step: &[
        "import type { stepSchemas } from \"./schema\"",
        "import { withFieldGroup } from \"@/components/ui/tanstack-form\"",
        "import { Progress } from \"@/components/ui/progress\"",
        "import { useFormStepper } from \"@/hooks/use-stepper\"",
    ],
};

const DATE_PICKER: &[&str] = &[
    "import { Popover, PopoverContent, PopoverTrigger } from \"@/components/ui/popover\"",
    "import { cn } from \"@/lib/utils\"",
    "import { Calendar } from \"@/components/ui/calendar\"",
    "import { Calendar as CalendarIcon } from \"lucide-react\"",
    "import { Button } from \"@/components/ui/button\"",
    "import { format } from \"date-fns\"",
];

const OTP: &[&str] = &[
    "import { InputOTP, InputOTPGroup, InputOTPSeparator, InputOTPSlot } from \"@/components/ui/input-otp\"",
];

const SELECT: &[&str] = &[
    "import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from \"@/components/ui/select\"",
];

const MULTI_SELECT: &[&str] = &[
    "import {\n\tMultiSelect,\n\tMultiSelectContent,\n\tMultiSelectItem,\n\tMultiSelectList,\n\tMultiSelectSearch,\n\tMultiSelectTrigger,\n\tMultiSelectValue,\n} from \"@/components/ui/multi-select\"",
    super::MULTI_SELECT_NOTE,
];

const PASSWORD: &[&str] = &[
    "import { InputGroup, InputGroupAddon, InputGroupInput } from \"@/components/ui/input-group\"",
    "import { Eye, EyeOff } from \"lucide-react\"",
    "import { useState } from \"react\"",
];

const RADIO_GROUP: &[&str] =
    &["import { RadioGroup, RadioGroupItem } from \"@/components/ui/radio-group\""];

const TOGGLE_GROUP: &[&str] =
    &["import { ToggleGroup, ToggleGroupItem } from \"@/components/ui/toggle-group\""];

const FORM_ARRAY: &[&str] = &[
    "import { Separator } from \"@/components/ui/separator\"",
    "import { Plus, Trash2 } from \"lucide-react\"",
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
        FieldKind::H1 | FieldKind::H2 | FieldKind::H3 => KindImports::Nothing,
        FieldKind::FieldDescription | FieldKind::FieldLegend => {
            KindImports::FieldParts(&["FieldDescription", "FieldLegend"])
        }
        FieldKind::Separator => KindImports::FieldParts(&["FieldSeparator"]),
        FieldKind::Input
        | FieldKind::Textarea
        | FieldKind::Checkbox
        | FieldKind::Switch
        | FieldKind::Slider => KindImports::Component,
    }
}

fn validation(library: ValidationLibrary) -> &'static str {
    match library {
        ValidationLibrary::Zod => "import * as z from \"zod\"",
        ValidationLibrary::Valibot => "import * as v from \"valibot\"",
        ValidationLibrary::Arktype => "import { type } from \"arktype\"",
    }
}
