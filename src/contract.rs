//! Framework contract
//!
//! The fixed, well-known names the generator validates against: which
//! annotation marks a perspective, which method the framework invokes to
//! obtain its definition, and what the generated wiring type looks like.
//! Carried as a value so hosts with different naming conventions can supply
//! their own; the default is the standard perspective contract.

use crate::model::TypeDescriptor;

/// Names and types that define the perspective generation contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkContract {
    /// Annotation marking a declaration as a perspective.
    pub marker: String,

    /// Name of the factory method the framework invokes at runtime.
    pub factory_method: String,

    /// Required return type of the factory method (exact match).
    pub return_type: TypeDescriptor,

    /// Accepted type for the factory method's single parameter, when the
    /// method takes one.
    pub parameter_type: TypeDescriptor,

    /// Suffix appended to the declaration name to form the generated type.
    pub generated_suffix: String,

    /// Base type the generated wiring type extends.
    pub base_type: String,
}

impl Default for FrameworkContract {
    fn default() -> Self {
        Self {
            marker: "Perspective".to_string(),
            factory_method: "getPerspective".to_string(),
            return_type: TypeDescriptor::new("PerspectiveDefinition"),
            parameter_type: TypeDescriptor::new("PlaceRequest"),
            generated_suffix: "Activity".to_string(),
            base_type: "AbstractPerspectiveActivity".to_string(),
        }
    }
}

impl FrameworkContract {
    /// Name of the generated wiring type for a declaration.
    pub fn generated_type_name(&self, declaration_name: &str) -> String {
        format!("{}{}", declaration_name, self.generated_suffix)
    }
}
