// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input: clicks, canvas panning, and drag-to-restructure.

use kurbo::Point;
use orgchart_gesture::{ClickResult, DropProposal, HitTarget, hit_test};
use orgchart_hierarchy::{Record, RecordId};
use tracing::{debug, info};

use crate::chart::{Gesture, Mode, OrgChart};
use crate::mutation::apply_drop;

impl<P: Clone, C> OrgChart<P, C> {
    fn hit(&self, canvas: Point) -> HitTarget {
        match &self.derived {
            Some(d) => hit_test(&d.tree, &d.layout, &self.metrics, canvas),
            None => HitTarget::Background,
        }
    }

    /// Handles a primary-button press at a screen position.
    ///
    /// In edit mode, pressing a card other than the root starts dragging it.
    /// Pressing a collapse toggle waits for the release. Anything else starts
    /// panning.
    pub fn pointer_down(&mut self, screen: Point) {
        // The release of an earlier drag never arrived.
        if self.gesture == Some(Gesture::Drag) {
            self.cancel_drag();
        }
        let canvas = self.camera.transform().screen_to_canvas(screen);
        let target = self.hit(canvas);
        self.click.on_down(target.clone(), screen);

        self.gesture = Some(match (&target, self.mode) {
            (HitTarget::Toggle(_), _) => Gesture::Press,
            (HitTarget::Body(id), Mode::Edit) => {
                if self.start_drag(id, canvas) {
                    Gesture::Drag
                } else {
                    Gesture::Press
                }
            }
            _ => Gesture::Pan(screen),
        });
    }

    fn start_drag(&mut self, id: &RecordId, canvas: Point) -> bool {
        let Some(derived) = &self.derived else {
            return false;
        };
        let Some(idx) = derived.tree.find(id.as_str()) else {
            return false;
        };
        let ghost = (self.hooks.render_content)(&self.records[idx.index()]);
        match self.drag.start(&derived.layout, idx, canvas, ghost) {
            Ok(()) => {
                debug!(%id, "drag started");
                self.scene.set_dragging(Some(id.clone()));
                true
            }
            Err(err) => {
                debug!(%id, %err, "drag rejected");
                false
            }
        }
    }

    /// Handles pointer motion at a screen position.
    pub fn pointer_move(&mut self, screen: Point) {
        self.click.on_move(screen);
        match self.gesture {
            Some(Gesture::Pan(last)) => {
                self.gesture = Some(Gesture::Pan(screen));
                self.pan_by(screen - last);
            }
            Some(Gesture::Drag) => {
                let canvas = self.camera.transform().screen_to_canvas(screen);
                if let Some(d) = &self.derived {
                    self.drag.update(&d.tree, &d.layout, &self.metrics, canvas);
                }
            }
            Some(Gesture::Press) | None => {}
        }
    }

    /// Handles the release of a press at a screen position.
    ///
    /// Ends a drag (applying its proposal, if any) or recognizes a click:
    /// a click on a collapse toggle toggles the node, and in view mode a click
    /// on a card toggles its selection.
    pub fn pointer_up(&mut self, screen: Point) {
        let canvas = self.camera.transform().screen_to_canvas(screen);
        let target = self.hit(canvas);
        let click = self.click.on_up(&target, screen);

        if self.gesture.take() == Some(Gesture::Drag) {
            let moved = self.drag.dragged().cloned();
            let proposal = self.drag.end();
            self.scene.set_dragging(None);
            if let (Some(moved), Some(proposal)) = (moved, proposal) {
                self.apply(&moved, &proposal);
            }
            return;
        }

        let ClickResult::Click(target) = click else {
            return;
        };
        match target {
            HitTarget::Toggle(id) => {
                if let Err(err) = self.toggle(id.as_str()) {
                    debug!(%id, %err, "toggle click ignored");
                }
            }
            HitTarget::Body(id) if self.mode == Mode::View => self.click_card(id),
            HitTarget::Body(_) | HitTarget::Background => {}
        }
    }

    fn click_card(&mut self, id: RecordId) {
        if self.scene.selected() == Some(&id) {
            self.scene.set_selected(None);
            return;
        }
        self.scene.set_selected(Some(id.clone()));
        if let Some(hook) = &mut self.hooks.on_node_click {
            hook(&id);
        }
    }

    /// Applies a drop of `moved` as if the user had completed the gesture.
    ///
    /// The drop hook may veto it. On success the chart is rebuilt and the
    /// data-change hook receives the full record list. Returns `true` if the
    /// records changed.
    pub fn apply(&mut self, moved: &RecordId, proposal: &DropProposal) -> bool {
        if let Some(hook) = &mut self.hooks.on_node_drop
            && !hook(moved, proposal.target())
        {
            info!(%moved, target = %proposal.target(), "drop vetoed");
            return false;
        }

        let mut records: Vec<Record<P>> = self.records.clone();
        if !apply_drop(&mut records, moved.as_str(), proposal) {
            debug!(%moved, "drop changes nothing");
            return false;
        }
        let reveal = match proposal {
            DropProposal::Reparent { target } => Some(target),
            DropProposal::Reorder { .. } => None,
        };
        if self.rebuild(records, reveal).is_err() {
            return false;
        }
        info!(%moved, target = %proposal.target(), "drop applied");
        if let Some(hook) = &mut self.hooks.on_data_change {
            hook(&self.records);
        }
        true
    }
}
