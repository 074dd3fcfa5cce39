use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::field::FieldId;

/// Snapshot of a submitted pet profile.
///
/// Submission is simulated: the snapshot is logged and shown in the
/// confirmation dialog, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    pub pet_name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<f64>,
    pub description: Option<String>,
    pub owner_name: String,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub photo: Option<PathBuf>,
    pub created_at: DateTime<Utc>,
}

impl PetProfile {
    /// Builds a profile from `(field, value)` pairs.
    ///
    /// Values are trimmed; blank optional values become `None`. Fields that
    /// are missing from `values` are treated as blank. `photo` is left unset.
    pub fn collect<'a>(
        values: impl IntoIterator<Item = (FieldId, &'a str)>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut profile = Self {
            pet_name: String::new(),
            species: String::new(),
            breed: None,
            age: None,
            description: None,
            owner_name: String::new(),
            owner_email: None,
            owner_phone: None,
            photo: None,
            created_at,
        };

        for (id, value) in values {
            let value = value.trim();
            let optional = (!value.is_empty()).then(|| value.to_string());
            match id {
                FieldId::PetName => profile.pet_name = value.to_string(),
                FieldId::Species => profile.species = value.to_string(),
                FieldId::Breed => profile.breed = optional,
                FieldId::Age => profile.age = value.parse().ok(),
                FieldId::Description => profile.description = optional,
                FieldId::OwnerName => profile.owner_name = value.to_string(),
                FieldId::OwnerEmail => profile.owner_email = optional,
                FieldId::OwnerPhone => profile.owner_phone = optional,
                // The typed path may never have loaded; see `with_photo`.
                FieldId::PetPhoto => {}
            }
        }
        profile
    }

    /// Sets the photo to the file that was actually loaded for preview.
    pub fn with_photo(mut self, photo: Option<PathBuf>) -> Self {
        self.photo = photo;
        self
    }
}
