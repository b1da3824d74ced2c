//! Signature validator
//!
//! Checks that a candidate declaration exposes the factory method the
//! framework will invoke: present by name, exact return type, arity 0 or 1
//! with the contract's parameter type. Rules are evaluated in order and the
//! first failure wins, so each invalid candidate reports exactly one reason.

use thiserror::Error;

use crate::contract::FrameworkContract;
use crate::model::{Declaration, Method};

/// Resolved call arity of a validated factory method.
///
/// The renderer branches on this to shape the generated call site; nothing
/// else in the generated text varies per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryArity {
    Nullary,
    Unary,
}

/// Why a candidate failed validation.
///
/// Closed set; every variant is a non-fatal notice. The variant selects the
/// diagnostic message text, never its severity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// No method with the expected name exists on the declaration.
    #[error("no '{expected}' method found - the framework cannot obtain a perspective definition")]
    MethodMissing { expected: String },

    /// The factory method exists but returns the wrong type.
    #[error("'{method}' must return {expected}, found {found}")]
    ReturnTypeMismatch {
        method: String,
        expected: String,
        found: String,
    },

    /// The factory method takes arguments the framework cannot supply.
    #[error("'{method}' must take no arguments or a single {expected}")]
    ArgumentsMismatch { method: String, expected: String },
}

impl InvalidReason {
    /// Stable machine-readable code for sinks that key on reason.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidReason::MethodMissing { .. } => "method-missing",
            InvalidReason::ReturnTypeMismatch { .. } => "return-type-mismatch",
            InvalidReason::ArgumentsMismatch { .. } => "arguments-mismatch",
        }
    }
}

/// Result of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome<'a> {
    Valid {
        declaration: &'a Declaration,
        method: &'a Method,
        arity: FactoryArity,
    },
    Invalid {
        declaration: &'a Declaration,
        reason: InvalidReason,
    },
}

impl ValidationOutcome<'_> {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }
}

/// Validate a candidate's factory method against the contract.
pub fn validate_factory<'a>(
    declaration: &'a Declaration,
    contract: &FrameworkContract,
) -> ValidationOutcome<'a> {
    let invalid = |reason| ValidationOutcome::Invalid {
        declaration,
        reason,
    };

    let Some(method) = declaration.method(&contract.factory_method) else {
        return invalid(InvalidReason::MethodMissing {
            expected: contract.factory_method.clone(),
        });
    };

    if method.return_type != contract.return_type {
        return invalid(InvalidReason::ReturnTypeMismatch {
            method: method.name.clone(),
            expected: contract.return_type.to_string(),
            found: method.return_type.to_string(),
        });
    }

    let arity = match method.params.as_slice() {
        [] => FactoryArity::Nullary,
        [param] if param.ty == contract.parameter_type => FactoryArity::Unary,
        _ => {
            return invalid(InvalidReason::ArgumentsMismatch {
                method: method.name.clone(),
                expected: contract.parameter_type.to_string(),
            });
        }
    };

    ValidationOutcome::Valid {
        declaration,
        method,
        arity,
    }
}
