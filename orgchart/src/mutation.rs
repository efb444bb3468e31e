// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying accepted drops to the record list.

use orgchart_gesture::{DropPosition, DropProposal};
use orgchart_hierarchy::Record;

/// Applies `proposal` for the record `moved` to `records`.
///
/// A reparent rewrites the moved record's parent id. A reorder moves the
/// record in the list so that it lands right before or after its sibling,
/// which is how sibling order is expressed. Returns `false`, leaving the list
/// untouched, when the edit would change nothing or an id is missing.
pub fn apply_drop<P>(records: &mut Vec<Record<P>>, moved: &str, proposal: &DropProposal) -> bool {
    let Some(from) = records.iter().position(|r| r.id.as_str() == moved) else {
        return false;
    };
    match proposal {
        DropProposal::Reparent { target } => {
            let record = &mut records[from];
            if record.parent_id.as_ref() == Some(target) {
                return false;
            }
            record.parent_id = Some(target.clone());
            true
        }
        DropProposal::Reorder { target, position } => {
            if target.as_str() == moved || !records.iter().any(|r| &r.id == target) {
                return false;
            }
            let record = records.remove(from);
            let Some(anchor) = records.iter().position(|r| &r.id == target) else {
                records.insert(from, record);
                return false;
            };
            let to = match position {
                DropPosition::Before => anchor,
                DropPosition::After => anchor + 1,
            };
            records.insert(to, record);
            to != from
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_hierarchy::RecordId;

    fn records() -> Vec<Record<u8>> {
        vec![
            Record::new("1", None, 0),
            Record::new("2", Some("1"), 1),
            Record::new("3", Some("1"), 2),
            Record::new("4", Some("1"), 3),
        ]
    }

    fn ids(records: &[Record<u8>]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn reorder(target: &str, position: DropPosition) -> DropProposal {
        DropProposal::Reorder {
            target: target.into(),
            position,
        }
    }

    #[test]
    fn reparent_rewrites_parent_once() {
        let mut list = records();
        let to_two = DropProposal::Reparent {
            target: "2".into(),
        };
        assert!(apply_drop(&mut list, "3", &to_two));
        assert_eq!(list[2].parent_id, Some(RecordId::from("2")));
        assert_eq!(list[2].payload, 2);
        assert!(!apply_drop(&mut list, "3", &to_two));
    }

    #[test]
    fn reorder_moves_within_the_list() {
        let mut list = records();
        assert!(apply_drop(&mut list, "4", &reorder("2", DropPosition::Before)));
        assert_eq!(ids(&list), ["1", "4", "2", "3"]);

        assert!(apply_drop(&mut list, "4", &reorder("3", DropPosition::After)));
        assert_eq!(ids(&list), ["1", "2", "3", "4"]);
        // The moved record keeps its parent.
        assert_eq!(list[3].parent_id, Some(RecordId::from("1")));
    }

    #[test]
    fn no_op_edits_report_false() {
        let mut list = records();
        assert!(!apply_drop(&mut list, "2", &reorder("3", DropPosition::Before)));
        assert!(!apply_drop(&mut list, "3", &reorder("2", DropPosition::After)));
        assert!(!apply_drop(&mut list, "9", &reorder("2", DropPosition::After)));
        assert!(!apply_drop(&mut list, "2", &reorder("9", DropPosition::After)));
        assert!(!apply_drop(&mut list, "2", &reorder("2", DropPosition::After)));
        assert_eq!(ids(&list), ["1", "2", "3", "4"]);
    }
}
