//! Composition layer - instances, templates, validation, advisory helpers
//!
//! Everything here is a pure, synchronous function over in-memory values;
//! the hot paths are cheap enough to re-run on every keystroke of an
//! interactive editor.

pub mod instance;
pub mod presets;
pub mod suggest;
pub mod template;
pub mod validation;

pub use self::instance::BlockInstance;
pub use self::presets::{expand_preset, preset_defs, preset_templates, PresetBlock, PresetDef};
pub use self::suggest::{can_enable, missing_requirements, suggested_blocks, EnableCheck};
pub use self::template::{Template, TemplateStore};
pub use self::validation::{CompositionValidator, Diagnostic, ValidationReport};
