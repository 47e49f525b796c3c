use crate::records::NameRecord;

/// Test utilities for creating mock feed records and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a raw-only record in the "SURNAME Given" result-feed convention
    pub fn create_surname_first_record() -> NameRecord {
        NameRecord::from_raw("VAN DER POEL Mathieu")
    }

    /// Creates a raw-only record that is entirely upper-cased
    pub fn create_all_uppercase_record() -> NameRecord {
        NameRecord::from_raw("SMITH JOHN")
    }

    /// Creates a raw-only record already in natural order
    pub fn create_natural_order_record() -> NameRecord {
        NameRecord::from_raw("Loana lecomte")
    }

    /// Creates a record with a single-token name
    pub fn create_mononym_record() -> NameRecord {
        NameRecord::from_raw("POGACAR")
    }

    /// Creates a record whose explicit fields disagree with its raw string
    pub fn create_explicit_fields_record() -> NameRecord {
        NameRecord {
            raw_name: Some("LECOMTE Loana".to_string()),
            first_name: Some("Demi".to_string()),
            last_name: Some("Vollering".to_string()),
        }
    }

    /// Creates a record with no usable name data
    pub fn create_empty_record() -> NameRecord {
        NameRecord {
            raw_name: Some("   ".to_string()),
            first_name: None,
            last_name: Some("".to_string()),
        }
    }
}
