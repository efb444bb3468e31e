// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use orgchart_hierarchy::{MalformedHierarchyError, RecordId};
use thiserror::Error;

/// Errors reported by [`OrgChart`](crate::OrgChart) operations.
///
/// None of them are fatal: the chart keeps its previous state, and each is also
/// logged when it happens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The records do not form a single rooted tree.
    #[error("malformed hierarchy: {0}")]
    Malformed(#[from] MalformedHierarchyError),
    /// No record has this id.
    #[error("no node with id `{0}`")]
    NodeNotFound(RecordId),
    /// Nothing has been rendered yet.
    #[error("no chart has been rendered")]
    NoData,
}
