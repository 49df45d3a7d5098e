use rx_integrity::domain::{
    bytes_to_hex, encode_identifier, hash_record, hex_to_bytes, hex_to_bytes_strict, CodecError,
    EncodedIdentifier, PrescriptionRecord,
};

fn amoxicillin() -> PrescriptionRecord {
    PrescriptionRecord::new("P1", "Amoxicillin", "500mg", Some(""), "RX-1")
}

#[cfg(test)]
mod hasher_tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let record = amoxicillin();
        assert_eq!(hash_record(&record), hash_record(&record.clone()));
    }

    #[test]
    fn test_missing_notes_equal_empty_notes() {
        let with_none = PrescriptionRecord::new("P1", "Amoxicillin", "500mg", None, "RX-1");
        assert_eq!(hash_record(&with_none), hash_record(&amoxicillin()));

        let parsed: PrescriptionRecord = serde_json::from_str(
            r#"{"patientId":"P1","drugName":"Amoxicillin","dosage":"500mg","prescriptionId":"RX-1"}"#,
        )
        .unwrap();
        assert_eq!(hash_record(&parsed), hash_record(&amoxicillin()));
    }

    #[test]
    fn test_single_field_change_changes_hash() {
        let base = hash_record(&amoxicillin());

        let variants = [
            PrescriptionRecord::new("P2", "Amoxicillin", "500mg", None, "RX-1"),
            PrescriptionRecord::new("P1", "Amoxicillin ", "500mg", None, "RX-1"),
            PrescriptionRecord::new("P1", "Amoxicillin", "250mg", None, "RX-1"),
            PrescriptionRecord::new("P1", "Amoxicillin", "500mg", Some("with food"), "RX-1"),
            PrescriptionRecord::new("P1", "Amoxicillin", "500mg", None, "RX-2"),
        ];

        for variant in &variants {
            assert_ne!(hash_record(variant), base, "{:?}", variant);
        }
    }

    #[test]
    fn test_field_boundaries_are_unambiguous() {
        let a = PrescriptionRecord::new("P1", "Amox", "icillin500mg", None, "RX-1");
        let b = PrescriptionRecord::new("P1", "Amoxicillin", "500mg", None, "RX-1");
        assert_ne!(hash_record(&a), hash_record(&b));
    }

    #[test]
    fn test_hash_is_lowercase_hex_of_32_bytes() {
        let hash = hash_record(&amoxicillin());
        let bytes = hex_to_bytes(&hash).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(hash, hash.to_lowercase());
        assert_eq!(amoxicillin().digest().to_hex(), hash);
    }
}

#[cfg(test)]
mod identifier_tests {
    use super::*;

    #[test]
    fn test_empty_encodes_to_zero() {
        assert_eq!(encode_identifier(""), EncodedIdentifier(0));
        assert_eq!(encode_identifier("RX-ABC"), EncodedIdentifier(0));
    }

    #[test]
    fn test_digits_extracted() {
        assert_eq!(encode_identifier("RX-123456789"), EncodedIdentifier(123456789));
    }

    #[test]
    fn test_keeps_last_ten_digits() {
        assert_eq!(
            encode_identifier("RX-12345678901234"),
            EncodedIdentifier(5678901234)
        );
    }

    #[test]
    fn test_numeric_ids_are_unchanged() {
        for id in ["0", "7", "42", "9999999999"] {
            let encoded = encode_identifier(id);
            assert_eq!(encoded.to_string(), id);
            assert_eq!(encode_identifier(&encoded.to_string()), encoded);
        }
    }

    #[test]
    fn test_ids_sharing_last_ten_digits_collide() {
        // Known limitation: only the last ten digits reach the ledger.
        assert_eq!(
            encode_identifier("RX-1-2345678901"),
            encode_identifier("CLINIC9-2345678901")
        );
    }
}

#[cfg(test)]
mod codec_tests {
    use super::*;

    #[test]
    fn test_prefixed_hex() {
        assert_eq!(hex_to_bytes("0x1a2b").unwrap(), vec![26, 43]);
    }

    #[test]
    fn test_uppercase_accepted() {
        assert_eq!(hex_to_bytes("0xFF00").unwrap(), vec![255, 0]);
    }

    #[test]
    fn test_round_trip() {
        let bytes: Vec<u8> = (0..=255).collect();
        let hex = bytes_to_hex(&bytes);
        assert_eq!(hex_to_bytes(&hex).unwrap(), bytes);
        assert_eq!(hex_to_bytes(&format!("0x{}", hex)).unwrap(), bytes);
    }

    #[test]
    fn test_odd_length_policy() {
        // Lenient decoder keeps the trailing digit as its own byte.
        assert_eq!(hex_to_bytes("0x1a2").unwrap(), vec![0x1a, 0x02]);
        assert_eq!(hex_to_bytes_strict("0x1a2"), Err(CodecError::OddLength(3)));
    }

    #[test]
    fn test_non_hex_rejected() {
        assert!(matches!(
            hex_to_bytes("0xg0"),
            Err(CodecError::InvalidHexDigit { digit: 'g', .. })
        ));
        assert!(hex_to_bytes("é0").is_err());
    }
}
