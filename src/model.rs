//! Declaration model for vista
//!
//! Defines the read-only view of a compilation unit that a front-end
//! supplier hands to the pipeline:
//! - `Unit`: one parsed source file (package + ordered declarations)
//! - `Declaration`: a type-like construct with annotations and methods
//! - `Method` / `Parameter`: callable shape used for signature validation
//! - `TypeDescriptor`: a fully-qualified type name, compared verbatim
//!
//! The pipeline only reads this model; it is built once per unit by the
//! supplier (see `loader` for the YAML supplier) and discarded after the run.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A fully-qualified type name.
///
/// Matching is exact string equality: the generator performs no subtyping,
/// coercion, or import resolution. Whatever the front end resolved the type
/// to is what gets compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDescriptor(pub String);

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeDescriptor {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeDescriptor {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A method parameter: a name plus a resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A method belonging to exactly one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,

    #[serde(rename = "returns")]
    pub return_type: TypeDescriptor,

    /// Ordered parameter list.
    #[serde(default)]
    pub params: Vec<Parameter>,
}

impl Method {
    /// Create a parameterless method.
    pub fn new(name: impl Into<String>, return_type: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params: Vec::new(),
        }
    }

    /// Builder-style: add a parameter.
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A named type-like construct inside a unit.
///
/// Identity within a unit is the simple name; the qualified name prefixes
/// the unit's package. Annotations form an unordered set keyed by marker
/// name. Method names are unique per declaration (the loader enforces this;
/// it is a front-end model invariant, not something the pipeline rechecks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,

    #[serde(default)]
    pub annotations: BTreeSet<String>,

    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Declaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: BTreeSet::new(),
            methods: Vec::new(),
        }
    }

    /// Builder-style: mark with an annotation.
    pub fn with_annotation(mut self, marker: impl Into<String>) -> Self {
        self.annotations.insert(marker.into());
        self
    }

    /// Builder-style: append a method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Whether this declaration carries the given marker annotation.
    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotations.contains(marker)
    }

    /// First-class method-by-name lookup.
    ///
    /// Name uniqueness is a model invariant, so the first match is the only
    /// match.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// One parsed source file's declaration model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Enclosing package/namespace, embedded unchanged in generated text.
    pub package: String,

    /// Declarations in source order. Pipeline output order follows this.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl Unit {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            declarations: Vec::new(),
        }
    }

    /// Builder-style: append a declaration.
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Fully-qualified name of a declaration in this unit.
    pub fn qualified_name(&self, declaration: &Declaration) -> String {
        if self.package.is_empty() {
            declaration.name.clone()
        } else {
            format!("{}.{}", self.package, declaration.name)
        }
    }
}
