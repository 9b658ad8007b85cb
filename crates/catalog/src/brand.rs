//! Brand record.

use wardrobe_core::{BrandId, DomainError, DomainResult};

/// A brand: identity plus a unique display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

/// Validate a brand name for create/rename: must be non-blank.
///
/// Uniqueness is enforced by the store, where the check and the write share
/// one lock.
pub fn validate_brand_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("brand name must not be blank"));
    }
    Ok(())
}
