use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Static facts about the clinic, consumed read-only by the greeting and the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicFacts {
    pub clinic_name: String,
    pub practitioner_name: String,
    pub city: String,
    pub hours_text: String,
    /// Digits only, no leading `+`.
    pub destination_handle: String,
    #[serde(default = "default_messaging_domain")]
    pub messaging_domain: String,
    /// Prepended to 10-digit phone numbers typed during booking.
    #[serde(default = "default_country_code")]
    pub country_code: String,
}

impl Default for ClinicFacts {
    fn default() -> Self {
        Self {
            clinic_name: "Rivisa Naturopathy Clinic".to_string(),
            practitioner_name: "Dr. Rita Parekh, NDDY".to_string(),
            city: "Surat, Gujarat".to_string(),
            hours_text: "Mon–Fri, 12:00 PM–5:00 PM (IST). 30-min slots with 15-min buffer."
                .to_string(),
            destination_handle: "919374519723".to_string(),
            messaging_domain: default_messaging_domain(),
            country_code: default_country_code(),
        }
    }
}

impl ClinicFacts {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let facts: ClinicFacts = serde_json::from_str(json)?;
        facts.validate()?;
        Ok(facts)
    }

    /// Load clinic facts from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let handle = &self.destination_handle;
        if !is_digits(handle) {
            return Err(ConfigError::InvalidHandle(handle.clone()));
        }
        if !is_digits(&self.country_code) {
            return Err(ConfigError::InvalidCountryCode(self.country_code.clone()));
        }
        let required = [
            ("clinic_name", &self.clinic_name),
            ("practitioner_name", &self.practitioner_name),
            ("city", &self.city),
            ("hours_text", &self.hours_text),
            ("messaging_domain", &self.messaging_domain),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField(field));
            }
        }
        Ok(())
    }

    /// The city without its region, e.g. "Surat" for "Surat, Gujarat".
    pub fn city_short_name(&self) -> &str {
        self.city.split(',').next().unwrap_or_default().trim()
    }
}

fn default_messaging_domain() -> String {
    "wa.me".to_string()
}

fn default_country_code() -> String {
    "91".to_string()
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
