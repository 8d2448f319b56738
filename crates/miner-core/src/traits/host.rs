//! The host capability interface.
//!
//! Every registry entry carries an explicit [`HostObject`] discriminant, so
//! implementations decide what is a collection or template instead of the
//! reporter probing shapes at runtime.

use crate::errors::HostError;
use crate::types::host::{SubscriptionInfo, TemplateDef, ViewNode};
use crate::types::record::Record;

/// One element of a full collection read.
pub type RecordRead = Result<Record, HostError>;

/// A named container of records owned by the host.
pub trait HostCollection {
    /// Current record count.
    fn count(&self) -> Result<usize, HostError>;

    /// Materialize every record. Individual records that cannot be enumerated
    /// are returned as `Err(HostError::MalformedRecord)`.
    fn fetch(&self) -> Result<Vec<RecordRead>, HostError>;
}

/// What a registry entry is.
pub enum HostObject<'a> {
    Collection(&'a dyn HostCollection),
    Template(&'a TemplateDef),
    Other,
}

impl std::fmt::Debug for HostObject<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collection(_) => write!(f, "Collection"),
            Self::Template(def) => write!(f, "Template({})", def.view_name),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A named entry in one of the host's registries.
#[derive(Debug)]
pub struct HostEntry<'a> {
    pub name: String,
    pub object: HostObject<'a>,
}

impl<'a> HostEntry<'a> {
    pub fn new(name: impl Into<String>, object: HostObject<'a>) -> Self {
        Self {
            name: name.into(),
            object,
        }
    }
}

/// Read-only access to the inspected application.
///
/// Registry methods return owned snapshots of the registry listing; the
/// entities they point to may still change or vanish before they are read.
pub trait HostRegistries {
    /// Fails with `MissingCapability` when the application is not present.
    fn probe(&self) -> Result<(), HostError>;

    /// Objects in the global scope.
    fn global_objects(&self) -> Result<Vec<HostEntry<'_>>, HostError>;

    /// Objects in the framework's namespace, named without the namespace prefix.
    fn namespace_objects(&self) -> Result<Vec<HostEntry<'_>>, HostError>;

    /// Every known template definition, keyed by registry name.
    fn template_registry(&self) -> Result<Vec<HostEntry<'_>>, HostError>;

    /// Views currently rendered.
    fn live_views(&self) -> Result<Vec<ViewNode>, HostError>;

    /// Subscriptions on the active connection.
    fn subscriptions(&self) -> Result<Vec<Result<SubscriptionInfo, HostError>>, HostError>;
}
