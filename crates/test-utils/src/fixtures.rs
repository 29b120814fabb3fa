//! Record fixtures for tests.

use land_registry_types::LandPayload;

/// A valid payload for registering a land parcel.
#[must_use]
pub fn sample_payload() -> LandPayload {
    sample_payload_for("Alice")
}

/// A valid payload with the given owner.
#[must_use]
pub fn sample_payload_for(owner: &str) -> LandPayload {
    LandPayload {
        location: "Plot 7".to_string(),
        owner: owner.to_string(),
        unique_identifier: "CAD-001".to_string(),
    }
}
