//! Primitive data kinds understood by the query layer.
//!
//! `KindId` is the closed set callers match on. `DataKind` is the shared
//! descriptor for each id; one `static` per kind, never copied.

use std::fmt;
use std::str::FromStr;

use crate::types::errors::KindError;
use crate::types::external;
use crate::types::registry::lookup_by_external_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindId {
    Boolean,

    // Integers
    TinyInt,
    SmallInt,
    Int,
    BigInt,

    // Floating point
    Float,
    Double,

    String,

    // Temporal
    Timestamp,
    Date,

    Binary,
}

impl KindId {
    /// Every kind, in catalog order.
    pub const ALL: [KindId; 11] = [
        KindId::Boolean,
        KindId::TinyInt,
        KindId::SmallInt,
        KindId::Int,
        KindId::BigInt,
        KindId::Float,
        KindId::Double,
        KindId::String,
        KindId::Timestamp,
        KindId::Date,
        KindId::Binary,
    ];

    /// The shared descriptor for this kind.
    pub fn data_kind(self) -> &'static DataKind {
        match self {
            KindId::Boolean => &BOOLEAN,
            KindId::TinyInt => &TINYINT,
            KindId::SmallInt => &SMALLINT,
            KindId::Int => &INT,
            KindId::BigInt => &BIGINT,
            KindId::Float => &FLOAT,
            KindId::Double => &DOUBLE,
            KindId::String => &STRING,
            KindId::Timestamp => &TIMESTAMP,
            KindId::Date => &DATE,
            KindId::Binary => &BINARY,
        }
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.data_kind(), f)
    }
}

/// Parses an external (metastore) type name.
impl FromStr for KindId {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_by_external_name(s).map(|kind| kind.id)
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DataKind {
    pub id: KindId,

    /// Internal name, used when rendering the kind.
    pub name: &'static str,

    /// Name the metastore uses for the same type.
    pub external_name: &'static str,

    pub is_primitive: bool,
}

impl DataKind {
    const fn primitive(id: KindId, name: &'static str, external_name: &'static str) -> Self {
        Self {
            id,
            name,
            external_name,
            is_primitive: true,
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl<'a> TryFrom<&'a str> for &'static DataKind {
    type Error = KindError;

    fn try_from(external_name: &'a str) -> Result<Self, Self::Error> {
        lookup_by_external_name(external_name)
    }
}

// ---------- catalog ----------

pub static BOOLEAN: DataKind =
    DataKind::primitive(KindId::Boolean, "boolean", external::BOOLEAN_TYPE_NAME);

pub static TINYINT: DataKind =
    DataKind::primitive(KindId::TinyInt, "tinyint", external::TINYINT_TYPE_NAME);

pub static SMALLINT: DataKind =
    DataKind::primitive(KindId::SmallInt, "smallint", external::SMALLINT_TYPE_NAME);

pub static INT: DataKind = DataKind::primitive(KindId::Int, "int", external::INT_TYPE_NAME);

pub static BIGINT: DataKind =
    DataKind::primitive(KindId::BigInt, "bigint", external::BIGINT_TYPE_NAME);

pub static FLOAT: DataKind =
    DataKind::primitive(KindId::Float, "float", external::FLOAT_TYPE_NAME);

pub static DOUBLE: DataKind =
    DataKind::primitive(KindId::Double, "double", external::DOUBLE_TYPE_NAME);

pub static STRING: DataKind =
    DataKind::primitive(KindId::String, "string", external::STRING_TYPE_NAME);

pub static TIMESTAMP: DataKind =
    DataKind::primitive(KindId::Timestamp, "timestamp", external::TIMESTAMP_TYPE_NAME);

pub static DATE: DataKind = DataKind::primitive(KindId::Date, "date", external::DATE_TYPE_NAME);

pub static BINARY: DataKind =
    DataKind::primitive(KindId::Binary, "binary", external::BINARY_TYPE_NAME);

/// The catalog in declaration order.
pub fn all_kinds() -> impl Iterator<Item = &'static DataKind> {
    KindId::ALL.into_iter().map(KindId::data_kind)
}
