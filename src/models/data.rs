use serde::Serialize;

/// Kind of document recognized from its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardType {
    #[serde(rename = "Moroccan National ID")]
    MoroccanNationalId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

/// Dates found on the card, one slot per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRoles {
    pub date_of_birth: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
}

/// Structured fields read from one identity card.
///
/// Absent values serialize as `null`, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityRecord {
    pub card_type: Option<CardType>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub id_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub gender: Option<Gender>,
    pub expiry_date: Option<String>,
    pub issue_date: Option<String>,
    pub address: Option<String>, // never populated
    pub raw_text: Vec<String>,
}

impl IdentityRecord {
    /// A record with every field absent.
    pub fn empty(raw_text: Vec<String>) -> Self {
        IdentityRecord {
            card_type: None,
            full_name: None,
            first_name: None,
            last_name: None,
            id_number: None,
            date_of_birth: None,
            place_of_birth: None,
            nationality: None,
            gender: None,
            expiry_date: None,
            issue_date: None,
            address: None,
            raw_text,
        }
    }
}

/// JSON envelope written by the command line front end.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<IdentityRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanResponse {
    pub fn ok(record: IdentityRecord) -> Self {
        ScanResponse {
            success: true,
            data: Some(record),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        ScanResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
