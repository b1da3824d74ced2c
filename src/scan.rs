//! Candidate scanner
//!
//! Filters a unit's declarations down to the marker-bearing candidates.
//! Declarations without the marker are silently excluded; that is the normal
//! case for most of a unit, not a diagnostic.

use crate::contract::FrameworkContract;
use crate::model::{Declaration, Unit};

/// Declarations carrying the contract's marker annotation, in the unit's
/// declaration order.
pub fn scan_candidates<'a>(
    unit: &'a Unit,
    contract: &FrameworkContract,
) -> Vec<&'a Declaration> {
    unit.declarations
        .iter()
        .filter(|decl| decl.has_annotation(&contract.marker))
        .collect()
}
