//! Parameter structures for client operations.
//!
//! This module contains the request payloads and operation parameters shared
//! across interfaces. They carry only serde derives so that interface layers
//! (CLI today, others later) can wrap them with framework-specific argument
//! types and convert via `From` without pulling framework dependencies into
//! the core.
//!
//! Validation here covers basic form checks only (presence, email shape,
//! password rules); everything beyond that is the server's job and comes back
//! as a [`crate::ClientError::Validation`].

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::models::wire;

/// Generic parameters for operations requiring just an ID.
///
/// Used for cancel_appointment and delete_account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// The atomic submission payload built from a completed wizard draft.
///
/// Serialized exactly as the appointment endpoint expects it: the date as an
/// ISO `YYYY-MM-DD` string and the time as a 24-hour `HH:MM` string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    /// ID of the owner booking the appointment
    pub owner_id: u64,
    /// Selected pets, in selection order
    pub pet_ids: Vec<u64>,
    /// Selected service names from the fixed catalog
    pub services: Vec<String>,
    /// Free-text notes; may be empty
    pub notes: String,
    /// Requested calendar day
    #[serde(with = "wire::date")]
    pub appointment_date: Date,
    /// Requested half-hour slot
    #[serde(with = "wire::time")]
    pub appointment_time: Time,
}

/// Parameters for logging in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email address
    pub email: String,
    /// Plain-text password, sent over TLS only
    pub password: String,
}

/// Parameters for registering a new owner account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    /// Display name (required)
    pub name: String,
    /// Email address (required, validated for shape)
    pub email: String,
    /// Password (required, validated against the password rules)
    pub password: String,
    /// Confirmation copy of the password; not sent to the server
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl Registration {
    /// Validate the registration form before it is sent.
    ///
    /// Mirrors the checks the sign-up form performs: name present, email has
    /// a plausible shape, password meets the strength rules, and the
    /// confirmation copy matches.
    ///
    /// # Errors
    ///
    /// * `ClientError::InvalidInput` - naming the first failing field
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ClientError::invalid_input("name").with_reason("Name is required"));
        }
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        if self.password != self.confirm_password {
            return Err(
                ClientError::invalid_input("confirm_password")
                    .with_reason("Passwords do not match"),
            );
        }
        Ok(())
    }
}

/// Parameters for changing the account password.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangePassword {
    /// Current password, verified by the server
    pub current_password: String,
    /// Replacement password, validated against the password rules
    pub new_password: String,
}

impl ChangePassword {
    /// Validate the new password against the strength rules.
    pub fn validate(&self) -> Result<()> {
        if self.current_password.is_empty() {
            return Err(ClientError::invalid_input("current_password")
                .with_reason("Current password is required"));
        }
        validate_password(&self.new_password)
    }
}

/// Parameters for adding a pet profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPet {
    /// ID of the owner the pet belongs to
    pub owner_id: u64,
    /// Display name (required)
    #[serde(rename = "pet_name")]
    pub name: String,
    /// Species (required)
    pub species: String,
    /// Breed (required)
    pub breed: String,
    /// Gender (required)
    pub gender: String,
}

impl NewPet {
    /// Validate that every required pet field was filled in.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("pet_name", &self.name),
            ("species", &self.species),
            ("breed", &self.breed),
            ("gender", &self.gender),
        ] {
            if value.trim().is_empty() {
                return Err(ClientError::invalid_input(field).with_reason("Field is required"));
            }
        }
        Ok(())
    }
}

/// Parameters for editing an existing pet profile.
///
/// Only the provided fields change; `None` leaves the server value as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePet {
    /// Pet ID to update (required)
    pub id: u64,
    /// Updated display name
    #[serde(rename = "pet_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Updated species
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    /// Updated breed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// Updated gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl UpdatePet {
    /// Validate that the update changes at least one field and that no
    /// provided field is blank.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("pet_name", &self.name),
            ("species", &self.species),
            ("breed", &self.breed),
            ("gender", &self.gender),
        ];
        if fields.iter().all(|(_, v)| v.is_none()) {
            return Err(
                ClientError::invalid_input("update").with_reason("Nothing to update")
            );
        }
        for (field, value) in fields {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(
                        ClientError::invalid_input(field).with_reason("Field cannot be blank")
                    );
                }
            }
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ClientError::invalid_input("email").with_reason("A valid email is required"))
    }
}

fn validate_password(password: &str) -> Result<()> {
    let reason = if password.is_empty() {
        Some("Password is required")
    } else if password.len() < 8 {
        Some("Password must be at least 8 characters")
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Password must contain an uppercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain a number")
    } else if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some("Password must contain a special character")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ClientError::invalid_input("password").with_reason(reason)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    fn valid_registration() -> Registration {
        Registration {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            password: "Hunter2!pass".to_string(),
            confirm_password: "Hunter2!pass".to_string(),
        }
    }

    #[test]
    fn test_registration_valid() {
        assert!(valid_registration().validate().is_ok());
    }

    #[test]
    fn test_registration_missing_name() {
        let mut params = valid_registration();
        params.name = "  ".to_string();

        match params.validate().unwrap_err() {
            ClientError::InvalidInput { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_registration_bad_email() {
        for email in ["", "dana", "dana@", "@example.com", "dana@nodot"] {
            let mut params = valid_registration();
            params.email = email.to_string();
            assert!(params.validate().is_err(), "accepted {email:?}");
        }
    }

    #[test]
    fn test_registration_weak_passwords() {
        for password in ["short1!", "nouppercase1!", "NoDigits!!", "NoSpecial123"] {
            let mut params = valid_registration();
            params.password = password.to_string();
            params.confirm_password = password.to_string();

            match params.validate().unwrap_err() {
                ClientError::InvalidInput { field, .. } => assert_eq!(field, "password"),
                other => panic!("Expected InvalidInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_registration_mismatched_confirmation() {
        let mut params = valid_registration();
        params.confirm_password = "Different1!".to_string();

        match params.validate().unwrap_err() {
            ClientError::InvalidInput { field, .. } => assert_eq!(field, "confirm_password"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_new_pet_requires_all_fields() {
        let mut params = NewPet {
            owner_id: 1,
            name: "Biscuit".to_string(),
            species: "Dog".to_string(),
            breed: "Corgi".to_string(),
            gender: "Male".to_string(),
        };
        assert!(params.validate().is_ok());

        params.breed = String::new();
        match params.validate().unwrap_err() {
            ClientError::InvalidInput { field, .. } => assert_eq!(field, "breed"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_update_pet_rejects_empty_update() {
        let params = UpdatePet {
            id: 1,
            ..UpdatePet::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_update_pet_rejects_blank_field() {
        let params = UpdatePet {
            id: 1,
            name: Some(" ".to_string()),
            ..UpdatePet::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_booking_request_wire_format() {
        let request = BookingRequest {
            owner_id: 3,
            pet_ids: vec![42, 7],
            services: vec!["Grooming".to_string()],
            notes: String::new(),
            appointment_date: jiff::civil::date(2025, 6, 1),
            appointment_time: jiff::civil::time(9, 0, 0, 0),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["appointment_date"], "2025-06-01");
        assert_eq!(json["appointment_time"], "09:00");
        assert_eq!(json["pet_ids"], serde_json::json!([42, 7]));
    }

    #[test]
    fn test_registration_confirmation_not_serialized() {
        let json = serde_json::to_string(&valid_registration()).unwrap();
        assert!(!json.contains("confirm_password"));
    }
}
