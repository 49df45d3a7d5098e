pub mod call;
pub mod codec;
pub mod identifier;
pub mod prescription;

pub use call::{CallArgument, CallDescriptor};
pub use codec::{bytes_to_hex, bytes_to_prefixed_hex, hex_to_bytes, hex_to_bytes_strict, CodecError};
pub use identifier::{encode_identifier, EncodedIdentifier};
pub use prescription::{hash_record, DigestBytes, PrescriptionRecord};
