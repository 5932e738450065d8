//! Product metadata: schema model, parser, and dotted-reference lookup.

pub mod error;
pub mod model;
pub mod parse;
pub mod reference;

pub use error::MetadataError;
pub use model::{
    Configurable, DefaultValue, Errand, FormType, InstanceDefinition, JobType, MultiSelectOption,
    OptionTemplate, PropertyBlueprint, PropertyInput, PropertyType, ResourceDefinition,
    SelectorPropertyInput,
};
pub use parse::{Metadata, SERVICE_NETWORK_TYPES};
