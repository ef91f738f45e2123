//! Primitive type names as the metastore spells them.
//!
//! These strings are the metastore's vocabulary and must match it
//! byte-for-byte. Do not edit them to suit internal naming.

pub const BOOLEAN_TYPE_NAME: &str = "boolean";
pub const TINYINT_TYPE_NAME: &str = "tinyint";
pub const SMALLINT_TYPE_NAME: &str = "smallint";
pub const INT_TYPE_NAME: &str = "int";
pub const BIGINT_TYPE_NAME: &str = "bigint";
pub const FLOAT_TYPE_NAME: &str = "float";
pub const DOUBLE_TYPE_NAME: &str = "double";
pub const STRING_TYPE_NAME: &str = "string";
pub const TIMESTAMP_TYPE_NAME: &str = "timestamp";
pub const DATE_TYPE_NAME: &str = "date";
pub const BINARY_TYPE_NAME: &str = "binary";
