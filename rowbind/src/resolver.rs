//! Field resolution.
//!
//! Computes the column bindings of a record type, promoting the fields of
//! embedded records the way struct embedding does in languages that have it:
//!
//! - embedded records are walked breadth-first, one embedding depth per level;
//! - a record type reached at an earlier level is not walked again;
//! - for each column name the shallowest candidate wins, except that an
//!   explicitly tagged candidate beats every untagged one;
//! - candidates that tie on depth and tag standing annihilate each other, and
//!   so does a field reached through the same record type embedded twice at
//!   one level. The name is then dropped from the result without error.
//!
//! The surviving fields are returned in index-path order.

use crate::field::{Field, FieldSet};
use crate::record::{Record, RecordRef, TypeRef};
use crate::tag::{self, parse_tag};
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::mem;

/// An embedded record type queued for the next level.
struct Pending {
    record: RecordRef,
    path: Vec<usize>,
}

/// A leaf field found during traversal.
struct Candidate {
    field: Field,
    /// Declared in a record type embedded more than once at the same level.
    ambiguous: bool,
}

/// Resolves the fields of `T`.
#[must_use]
pub fn resolve<T: Record>() -> FieldSet {
    resolve_ref(T::record_ref())
}

/// Resolves the fields of the record type behind `root`.
#[must_use]
pub fn resolve_ref(root: RecordRef) -> FieldSet {
    let mut next = vec![Pending {
        record: root,
        path: Vec::new(),
    }];
    // How often each record type was queued for the level after the current one.
    let mut next_count: HashMap<TypeId, usize> = HashMap::new();
    let mut visited: HashSet<TypeId> = HashSet::new();
    let mut found: Vec<Candidate> = Vec::new();

    while !next.is_empty() {
        let current = mem::take(&mut next);
        let count = mem::take(&mut next_count);

        for pending in current {
            let id = pending.record.id();
            if !visited.insert(id) {
                continue;
            }
            let ambiguous = count.get(&id).copied().unwrap_or(0) > 1;
            let record_type = pending.record.describe();
            let context = if pending.path.is_empty() {
                ""
            } else {
                record_type.name()
            };

            for (index, def) in record_type.fields().iter().enumerate() {
                if !def.exported || def.tag == tag::EXCLUDE {
                    continue;
                }
                let (name, _) = parse_tag(def.tag);
                let mut path = Vec::with_capacity(pending.path.len() + 1);
                path.extend_from_slice(&pending.path);
                path.push(index);

                if name.is_empty()
                    && def.embedded
                    && let TypeRef::Record(inner) = def.ty
                {
                    let queued = next_count.entry(inner.id()).or_insert(0);
                    *queued += 1;
                    if *queued == 1 {
                        next.push(Pending {
                            record: inner,
                            path,
                        });
                    }
                    continue;
                }

                let explicitly_tagged = !name.is_empty();
                let bound_name = if explicitly_tagged { name } else { def.name };
                if bound_name.is_empty() {
                    continue;
                }
                found.push(Candidate {
                    field: Field {
                        context,
                        bound_name,
                        declared_name: def.name,
                        explicitly_tagged,
                        path,
                        ty: def.ty,
                    },
                    ambiguous,
                });
            }
        }
    }

    // By name, then depth, tagged before untagged, then index path.
    found.sort_by(|a, b| {
        let (a, b) = (&a.field, &b.field);
        a.bound_name
            .cmp(b.bound_name)
            .then(a.depth().cmp(&b.depth()))
            .then(b.explicitly_tagged.cmp(&a.explicitly_tagged))
            .then_with(|| a.path.cmp(&b.path))
    });

    let mut fields: Vec<Field> = found
        .chunk_by(|a, b| a.field.bound_name == b.field.bound_name)
        .filter_map(dominant)
        .map(|c| c.field.clone())
        .collect();
    fields.sort_by(|a, b| a.path.cmp(&b.path));

    FieldSet::new(root, fields)
}

/// Picks the field that owns a column name among all candidates bound to it,
/// or `None` when the name is ambiguous.
///
/// `run` must be sorted by depth, tagged candidates first within a depth.
fn dominant(run: &[Candidate]) -> Option<&Candidate> {
    let any_tagged = run.iter().any(|c| c.field.explicitly_tagged);
    let mut competitors = run
        .iter()
        .filter(|c| !any_tagged || c.field.explicitly_tagged);
    let winner = competitors.next()?;
    if winner.ambiguous {
        return None;
    }
    match competitors.next() {
        Some(runner_up) if runner_up.field.depth() == winner.field.depth() => None,
        _ => Some(winner),
    }
}
