//! Pet model definition.

use serde::{Deserialize, Serialize};

/// A pet as returned by the pet-list endpoint.
///
/// Server-owned and read-only from the wizard's perspective. The wizard
/// re-fetches the list on every screen focus and keeps only a transient copy
/// for the lifetime of the screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pet {
    /// Unique identifier for the pet
    #[serde(rename = "pet_id")]
    pub id: u64,

    /// Display name
    #[serde(rename = "pet_name")]
    pub name: String,

    /// Species (e.g. "Dog", "Cat")
    pub species: String,

    /// Breed within the species
    #[serde(default)]
    pub breed: Option<String>,

    /// Gender as recorded by the owner
    #[serde(default)]
    pub gender: Option<String>,

    /// Server-relative URL of the profile image, if one was uploaded
    #[serde(rename = "pet_image_url", default)]
    pub image_url: Option<String>,
}
