// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orgchart Hierarchy: flat records in, rooted tree out.
//!
//! This crate is the first stage of the chart pipeline. It owns:
//!
//! - [`Record`]: the external unit of data, an id plus an optional parent id and
//!   a caller-defined payload `P`. Records may also carry related ids, which
//!   are drawn as auxiliary links but never affect the tree.
//! - [`Hierarchy`]: an arena of [`TreeNode`]s built from a record slice by
//!   [`Hierarchy::build`]. Sibling order is input order.
//! - [`Children`]: the per-node expand/collapse state. A node's children live
//!   either in the [`Children::Expanded`] slot or in the [`Children::Collapsed`]
//!   slot, never in both.
//!
//! Building fails with a [`MalformedHierarchyError`] when the records do not
//! describe exactly one tree: zero or several roots, duplicate ids, a missing
//! parent, or a parent cycle.
//!
//! Layout positions are stored on the nodes ([`TreeNode::position`] and
//! [`TreeNode::previous`]) but computed elsewhere; see `orgchart_layout`.
//!
//! ## Minimal example
//!
//! ```rust
//! use orgchart_hierarchy::{Hierarchy, Record};
//!
//! let records = vec![
//!     Record::new("ceo", None, "Grace"),
//!     Record::new("cto", Some("ceo"), "Ada"),
//! ];
//! let mut tree = Hierarchy::build(&records).unwrap();
//!
//! let cto = tree.find("cto").unwrap();
//! assert_eq!(tree.node(cto).depth(), 1);
//!
//! // Collapsing hides children from traversal, but keeps them in the tree.
//! tree.collapse(tree.root());
//! assert_eq!(tree.visible_preorder().len(), 1);
//! assert_eq!(tree.flatten().len(), 2);
//! ```

mod error;
mod hierarchy;
mod node;
mod record;

pub use error::MalformedHierarchyError;
pub use hierarchy::Hierarchy;
pub use node::{ChildList, Children, NodeIdx, TreeNode};
pub use record::{Record, RecordId};
