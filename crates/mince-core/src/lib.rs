pub mod coercion;
pub mod digest;
pub mod field_path;
pub mod filter;
pub mod issues;
pub mod nested_key;
pub mod stable_hash;
pub mod stable_json;
pub mod value;

pub use coercion::{opaque_coercion, Coercion, CoercionTable, EnumCoercion, OpaqueCoercion, TimestampCoercion};
pub use digest::StructuralDigest;
pub use field_path::{FieldPath, FieldPathSegment};
pub use filter::{ConfigurationError, FieldFilter};
pub use issues::{IssueSeverity, StructuredIssue};
pub use nested_key::find_nested_key;
pub use stable_hash::{sha256_hex, stable_hash_hex, DIGEST_HEX_LEN};
pub use stable_json::{stable_json_bytes, stable_json_string, EncodingError};
pub use value::{EnumConstant, Mapping, OpaqueValue, ScalarEnum, StructuredValue, Timestamp};
