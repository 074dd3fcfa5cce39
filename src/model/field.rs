//! Field descriptors for the pet profile form.

use std::fmt;

/// Identity of a field on the pet profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    PetName,
    Species,
    Breed,
    Age,
    Description,
    OwnerName,
    OwnerEmail,
    OwnerPhone,
    PetPhoto,
}

impl FieldId {
    /// Returns the element id this field was bound to in the HTML form.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::PetName => "petName",
            Self::Species => "species",
            Self::Breed => "breed",
            Self::Age => "age",
            Self::Description => "description",
            Self::OwnerName => "ownerName",
            Self::OwnerEmail => "ownerEmail",
            Self::OwnerPhone => "ownerPhone",
            Self::PetPhoto => "petPhoto",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Which validation rule family applies to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Generic,
    Email,
    Tel,
    Age,
}

/// How the host edits a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line free text.
    Text,
    /// Longer free text, edited on one line like [`Text`](Self::Text).
    ///
    /// Enter still submits the form; there is no newline binding.
    TextArea,
    /// One of a fixed list of options; the empty string means "nothing selected".
    Select(&'static [&'static str]),
    /// A path to a file on disk.
    File,
}

/// Static description of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    /// Display label shown in the field's border.
    pub label: &'static str,
    pub kind: FieldKind,
    pub input: InputKind,
    /// Whether the trimmed value must be non-empty.
    pub required: bool,
}

/// Options offered by the species select.
pub const SPECIES_OPTIONS: &[&str] = &["Dog", "Cat", "Bird", "Rabbit", "Fish", "Reptile", "Other"];

/// The fields of the pet profile form, in display and validation order.
pub const PET_PROFILE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: FieldId::PetName,
        label: "Pet Name",
        kind: FieldKind::Generic,
        input: InputKind::Text,
        required: true,
    },
    FieldDescriptor {
        id: FieldId::Species,
        label: "Species",
        kind: FieldKind::Generic,
        input: InputKind::Select(SPECIES_OPTIONS),
        required: true,
    },
    FieldDescriptor {
        id: FieldId::Breed,
        label: "Breed",
        kind: FieldKind::Generic,
        input: InputKind::Text,
        required: false,
    },
    FieldDescriptor {
        id: FieldId::Age,
        label: "Age (years)",
        kind: FieldKind::Age,
        input: InputKind::Text,
        required: false,
    },
    FieldDescriptor {
        id: FieldId::Description,
        label: "Description",
        kind: FieldKind::Generic,
        input: InputKind::TextArea,
        required: false,
    },
    FieldDescriptor {
        id: FieldId::OwnerName,
        label: "Owner Name",
        kind: FieldKind::Generic,
        input: InputKind::Text,
        required: true,
    },
    FieldDescriptor {
        id: FieldId::OwnerEmail,
        label: "Owner Email",
        kind: FieldKind::Email,
        input: InputKind::Text,
        required: false,
    },
    FieldDescriptor {
        id: FieldId::OwnerPhone,
        label: "Owner Phone",
        kind: FieldKind::Tel,
        input: InputKind::Text,
        required: false,
    },
    FieldDescriptor {
        id: FieldId::PetPhoto,
        label: "Photo (file path)",
        kind: FieldKind::Generic,
        input: InputKind::File,
        required: false,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn field_ids_are_unique() {
        let ids: HashSet<FieldId> = PET_PROFILE_FIELDS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), PET_PROFILE_FIELDS.len());
    }

    #[test]
    fn element_ids_match_html_form() {
        assert_eq!(FieldId::PetPhoto.element_id(), "petPhoto");
        assert_eq!(FieldId::Description.element_id(), "description");
        assert_eq!(FieldId::OwnerPhone.element_id(), "ownerPhone");
        assert_eq!(FieldId::OwnerPhone.to_string(), "ownerPhone");
    }

    #[test]
    fn required_fields() {
        let required: Vec<FieldId> = PET_PROFILE_FIELDS
            .iter()
            .filter(|d| d.required)
            .map(|d| d.id)
            .collect();
        assert_eq!(
            required,
            vec![FieldId::PetName, FieldId::Species, FieldId::OwnerName]
        );
    }

    #[test]
    fn kinds_are_tagged_explicitly() {
        let kind_of = |id| {
            PET_PROFILE_FIELDS
                .iter()
                .find(|d| d.id == id)
                .map(|d| d.kind)
                .unwrap()
        };
        assert_eq!(kind_of(FieldId::OwnerEmail), FieldKind::Email);
        assert_eq!(kind_of(FieldId::OwnerPhone), FieldKind::Tel);
        assert_eq!(kind_of(FieldId::Age), FieldKind::Age);
        assert_eq!(kind_of(FieldId::PetName), FieldKind::Generic);
    }
}
