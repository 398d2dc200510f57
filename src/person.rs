// Records used by every lesson: a person with a nested contact record.
//
// A record can be built three ways:
// - positionally, through Person::new, where argument order is field order
// - with named fields, which is order independent
// - from its zero value, Person::default, followed by field assignment

use serde::Serialize;
use std::fmt;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub zip_code: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub contact_info: ContactInfo,
}

impl ContactInfo {
    pub fn new(email: impl Into<String>, zip_code: u32) -> Self {
        ContactInfo {
            email: email.into(),
            zip_code,
        }
    }
}

impl Person {
    // Both names are String: swapping them compiles fine and silently
    // produces the wrong record.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        contact_info: ContactInfo,
    ) -> Self {
        Person {
            first_name: first_name.into(),
            last_name: last_name.into(),
            contact_info,
        }
    }

    /// True while every field still holds its default.
    pub fn is_zero(&self) -> bool {
        *self == Person::default()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{email:{} zip_code:{}}}", self.email, self.zip_code)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{first_name:{} last_name:{} contact_info:{}}}",
            self.first_name, self.last_name, self.contact_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> Person {
        Person::new(
            "Alex",
            "Anderson",
            ContactInfo::new("alex.anderson@x.com", 123456),
        )
    }

    #[test]
    fn test_display_lists_every_field() {
        assert_eq!(
            alex().to_string(),
            "{first_name:Alex last_name:Anderson contact_info:{email:alex.anderson@x.com zip_code:123456}}"
        );
    }

    #[test]
    fn test_positional_and_named_agree() {
        let named = Person {
            last_name: "Anderson".to_string(),
            contact_info: ContactInfo {
                zip_code: 123456,
                email: "alex.anderson@x.com".to_string(),
            },
            first_name: "Alex".to_string(),
        };
        assert_eq!(named, alex());
    }

    #[test]
    fn test_positional_order_matters() {
        let swapped = Person::new("Anderson", "Alex", ContactInfo::default());
        assert_eq!(swapped.first_name, "Anderson");
        assert_ne!(swapped.first_name, alex().first_name);
    }

    #[test]
    fn test_default_is_zero_value() {
        let jerry = Person::default();
        assert!(jerry.is_zero());
        assert_eq!(jerry.first_name, "");
        assert_eq!(jerry.last_name, "");
        assert_eq!(jerry.contact_info.email, "");
        assert_eq!(jerry.contact_info.zip_code, 0);
        assert_eq!(
            jerry.to_string(),
            "{first_name: last_name: contact_info:{email: zip_code:0}}"
        );
    }

    #[test]
    fn test_assignment_after_default() {
        let mut jerry = Person::default();
        jerry.first_name = "Jerry".to_string();
        assert!(!jerry.is_zero());
        jerry.last_name = "Gan".to_string();
        jerry.contact_info = ContactInfo::new("jerry.gan@x.com", 5201314);
        assert_eq!(jerry.contact_info.zip_code, 5201314);
    }

    #[test]
    fn test_to_json_uses_field_names() {
        let json = alex().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["first_name"], "Alex");
        assert_eq!(value["contact_info"]["zip_code"], 123456);
    }
}
