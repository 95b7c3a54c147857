//! `get`/`set` over a [`policy_value::Value`] tree, following a parsed
//! [`Path`]. Mirrors the teacher's `JsonPathEval` walk but trades "collect
//! all matches" for the DSL's single-target dotted/indexed semantics, and
//! adds `set` with auto-vivification (spec.md §4.1).

use crate::error::ResolveError;
use crate::types::{Path, Segment};
use indexmap::IndexMap;
use policy_value::Value;

/// Reads the value at `path` in `tree`.
///
/// A missing object key reads as `Null` rather than erroring (so `== null`
/// checks can address absent properties); any other structural mismatch —
/// indexing past an array's length, or stepping into a primitive — is an
/// error.
pub fn get(tree: &Value, path: &Path) -> Result<Value, ResolveError> {
    let mut current = tree;
    for segment in &path.segments {
        match segment {
            Segment::Property(name) => match current {
                Value::Object(map) => match map.get(name) {
                    Some(v) => current = v,
                    None => return Ok(Value::Null),
                },
                other => {
                    return Err(ResolveError::PropertyOnNonContainer(
                        name.clone(),
                        other.kind(),
                    ))
                }
            },
            Segment::Index(i) => match current {
                Value::Array(arr) => {
                    let idx = usize::try_from(*i).map_err(|_| ResolveError::IndexOutOfBounds(*i, arr.len()))?;
                    match arr.get(idx) {
                        Some(v) => current = v,
                        None => return Err(ResolveError::IndexOutOfBounds(*i, arr.len())),
                    }
                }
                other => return Err(ResolveError::IndexOnNonArray(other.kind())),
            },
        }
    }
    Ok(current.clone())
}

/// Writes `value` at `path` in `tree`, auto-vivifying missing intermediate
/// containers and extending arrays with `Null` fill up to the required
/// index.
pub fn set(tree: &mut Value, path: &Path, value: Value) -> Result<(), ResolveError> {
    if path.segments.is_empty() {
        *tree = value;
        return Ok(());
    }
    set_inner(tree, &path.segments, value)
}

fn set_inner(node: &mut Value, segments: &[Segment], value: Value) -> Result<(), ResolveError> {
    let (head, rest) = segments.split_first().expect("non-empty by construction");

    match head {
        Segment::Property(name) => {
            if matches!(node, Value::Null) {
                *node = Value::Object(IndexMap::new());
            }
            let map = match node {
                Value::Object(m) => m,
                other => {
                    return Err(ResolveError::SetPropertyOnIncompatible(
                        name.clone(),
                        other.kind(),
                    ))
                }
            };
            if rest.is_empty() {
                map.insert(name.clone(), value);
                return Ok(());
            }
            let entry = map.entry(name.clone()).or_insert(Value::Null);
            set_inner(entry, rest, value)
        }
        Segment::Index(i) => {
            if matches!(node, Value::Null) {
                *node = Value::Array(Vec::new());
            }
            let arr = match node {
                Value::Array(a) => a,
                other => return Err(ResolveError::SetIndexOnIncompatible(other.kind())),
            };
            let idx = usize::try_from(*i).map_err(|_| ResolveError::IndexOnNonArray("array"))?;
            if idx >= arr.len() {
                arr.resize(idx + 1, Value::Null);
            }
            if rest.is_empty() {
                arr[idx] = value;
                return Ok(());
            }
            set_inner(&mut arr[idx], rest, value)
        }
    }
}
