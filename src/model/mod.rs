mod counter;
mod field;
mod phone;
mod profile;
mod validation;

pub use counter::{DEFAULT_DESCRIPTION_LIMIT, enforce_limit};
pub use field::{FieldDescriptor, FieldId, FieldKind, InputKind, PET_PROFILE_FIELDS, SPECIES_OPTIONS};
pub use phone::{PHONE_DIGITS, delete_last_digit, format_phone};
pub use profile::PetProfile;
pub use validation::{
    AGE_RANGE, ValidationError, is_valid_age, is_valid_email, is_valid_phone, validate,
};
