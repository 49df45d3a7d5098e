use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

use super::identifier::{encode_identifier, EncodedIdentifier};

/// JSON keys of the canonical form, in hashing order.
pub const CANONICAL_FIELDS: [&str; 5] = ["patientId", "drugName", "dosage", "notes", "prescriptionId"];

/// Prescription fields as entered by the doctor and re-entered by the pharmacy.
///
/// Hashing uses the fixed field order of [`CANONICAL_FIELDS`]. Changing it
/// changes every hash and breaks verification of issued prescriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionRecord {
    pub patient_id: String,
    pub drug_name: String,
    pub dosage: String,
    #[serde(default)]
    pub notes: String,
    pub prescription_id: String,
}

impl PrescriptionRecord {
    pub fn new(
        patient_id: &str,
        drug_name: &str,
        dosage: &str,
        notes: Option<&str>,
        prescription_id: &str,
    ) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            drug_name: drug_name.to_string(),
            dosage: dosage.to_string(),
            notes: notes.unwrap_or_default().to_string(),
            prescription_id: prescription_id.to_string(),
        }
    }

    /// Compact JSON object of the five fields in [`CANONICAL_FIELDS`] order.
    pub fn canonical_form(&self) -> String {
        let values = [
            &self.patient_id,
            &self.drug_name,
            &self.dosage,
            &self.notes,
            &self.prescription_id,
        ];

        let members: Vec<String> = CANONICAL_FIELDS
            .iter()
            .zip(values)
            .map(|(key, value)| format!("\"{}\":{}", key, Value::from(value.as_str())))
            .collect();

        format!("{{{}}}", members.join(","))
    }

    pub fn digest(&self) -> DigestBytes {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_form().as_bytes());
        DigestBytes(hasher.finalize().into())
    }

    pub fn encoded_id(&self) -> EncodedIdentifier {
        encode_identifier(&self.prescription_id)
    }
}

/// SHA-256 digest of a record's canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestBytes(pub [u8; 32]);

impl DigestBytes {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for DigestBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Lowercase hex SHA-256 of the record's canonical form.
pub fn hash_record(record: &PrescriptionRecord) -> String {
    record.digest().to_hex()
}
