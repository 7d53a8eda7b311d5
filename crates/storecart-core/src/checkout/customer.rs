//! Customer identity fields.

use serde::{Deserialize, Serialize};

/// Who the order is for. All three fields are required at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerDetails {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Names of the fields that are blank. Whitespace-only counts as blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check that every field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.phone.trim(), self.address.trim())
    }
}

/// The input surface holding the identity fields.
pub trait CustomerForm {
    /// Current field values.
    fn read(&self) -> CustomerDetails;

    /// Blank every field.
    fn clear(&mut self);
}

impl CustomerForm for CustomerDetails {
    fn read(&self) -> CustomerDetails {
        self.clone()
    }

    fn clear(&mut self) {
        *self = CustomerDetails::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_details() {
        let details = CustomerDetails::new("Asha", "9876543210", "12 MG Road");
        assert!(details.is_complete());
        assert!(details.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let details = CustomerDetails::new("", "9876543210", "   ");
        assert_eq!(details.missing_fields(), vec!["name", "address"]);
        assert!(!details.is_complete());
        assert_eq!(CustomerDetails::default().missing_fields().len(), 3);
    }

    #[test]
    fn test_trimmed() {
        let details = CustomerDetails::new(" Asha ", "98765\n", "\t12 MG Road");
        assert_eq!(
            details.trimmed(),
            CustomerDetails::new("Asha", "98765", "12 MG Road")
        );
    }

    #[test]
    fn test_form_clear() {
        let mut form = CustomerDetails::new("Asha", "98765", "12 MG Road");
        CustomerForm::clear(&mut form);
        assert_eq!(form, CustomerDetails::default());
    }
}
