// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::RecordId;

/// Reasons a record list cannot be turned into a single rooted tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedHierarchyError {
    /// No record has an empty parent reference (this includes an empty list).
    #[error("no root record")]
    NoRoot,
    /// More than one record has an empty parent reference.
    #[error("multiple root records: `{first}` and `{second}`")]
    MultipleRoots {
        /// First root in input order.
        first: RecordId,
        /// Second root in input order.
        second: RecordId,
    },
    /// Two records share an id.
    #[error("duplicate record id `{0}`")]
    DuplicateId(RecordId),
    /// A record names a parent that does not exist.
    #[error("record `{id}` references missing parent `{parent_id}`")]
    DanglingParent {
        /// The referencing record.
        id: RecordId,
        /// The missing parent id.
        parent_id: RecordId,
    },
    /// A record is its own ancestor.
    #[error("record `{0}` is part of a parent cycle")]
    Cycle(RecordId),
}
