// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat input records and their identifiers.

use core::borrow::Borrow;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`Record`], unique within one record list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One externally supplied entity: an id, a parent reference, and a payload.
///
/// The chart only ever reads [`Record::id`], [`Record::parent_id`], and
/// [`Record::related_ids`]; the payload is handed back untouched to the
/// content renderer and to data-change listeners.
///
/// With serde the payload is flattened, so a record reads and writes as
/// `{ "id": .., "parentId": .., "relatedIds": [..], ...payload }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<P> {
    /// Unique identifier.
    pub id: RecordId,
    /// Parent identifier; `None` marks the root.
    pub parent_id: Option<RecordId>,
    /// Non-hierarchical associations, drawn as auxiliary links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_ids: Vec<RecordId>,
    /// Caller-defined fields.
    #[serde(flatten)]
    pub payload: P,
}

impl<P> Record<P> {
    /// Creates a record without related ids.
    pub fn new(id: impl Into<RecordId>, parent_id: Option<&str>, payload: P) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(RecordId::from),
            related_ids: Vec::new(),
            payload,
        }
    }

    /// Adds non-hierarchical associations to this record.
    #[must_use]
    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RecordId>,
    {
        self.related_ids.extend(related.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if this record has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
