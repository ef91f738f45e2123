//! Primitive data kinds shared with the metastore.
//!
//! The catalog is fixed at compile time. Changes must be additive only.

pub mod errors;
pub mod external;
pub mod kind;
pub mod registry;

pub use errors::KindError;
pub use kind::{
    BIGINT, BINARY, BOOLEAN, DATE, DOUBLE, DataKind, FLOAT, INT, KindId, SMALLINT, STRING,
    TIMESTAMP, TINYINT, all_kinds,
};
pub use registry::{describe, lookup_by_external_name};
