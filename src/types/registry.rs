//! Reverse index from metastore type names to kinds.
//!
//! Built once on first lookup and read-only afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::debugger::Component;
use crate::types::errors::KindError;
use crate::types::kind::{DataKind, KindId, all_kinds};
use crate::{kind_debug, kind_trace};

static BY_EXTERNAL_NAME: LazyLock<HashMap<&'static str, &'static DataKind>> =
    LazyLock::new(|| {
        let mut index = HashMap::with_capacity(KindId::ALL.len());
        for kind in all_kinds() {
            let previous = index.insert(kind.external_name, kind);
            debug_assert!(
                previous.is_none(),
                "duplicate external name '{}'",
                kind.external_name
            );
        }

        kind_debug!(
            Component::Registry,
            "built kind index with {} entries",
            index.len()
        );
        index
    });

/// Resolve a metastore type name to its kind.
///
/// Matching is exact: no case folding, no trimming.
pub fn lookup_by_external_name(name: &str) -> Result<&'static DataKind, KindError> {
    match BY_EXTERNAL_NAME.get(name) {
        Some(kind) => Ok(*kind),
        None => {
            kind_trace!(Component::Registry, "no kind for external name '{}'", name);
            Err(KindError::UnknownKind(name.to_string()))
        }
    }
}

/// One-line report for a metastore type name, as `kindcli` prints it.
///
/// `<external> -> <internal> (primitive)` on a hit; a miss fails the same way
/// `lookup_by_external_name` does.
pub fn describe(name: &str) -> Result<String, KindError> {
    let kind = lookup_by_external_name(name)?;
    let shape = if kind.is_primitive {
        "primitive"
    } else {
        "complex"
    };
    Ok(format!("{} -> {} ({})", kind.external_name, kind, shape))
}
