//! Template registry filtering, load-state derivation, and template details.

pub mod detail;
pub mod load_state;

pub use detail::TemplateDetail;
pub use load_state::{known_templates, strip_prefix, KnownTemplate, LoadedTemplates};
