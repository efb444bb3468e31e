// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart facade: owns the records and runs the pipeline.

use core::fmt;

use kurbo::{Point, Size, Vec2};
use orgchart_gesture::{ClickState, DragController, DropIndicator, Ghost, HitTarget};
use orgchart_hierarchy::{Hierarchy, NodeIdx, Record, RecordId};
use orgchart_layout::{Layout, NodeMetrics};
use orgchart_scene::{Scene, UpdateKind};
use orgchart_view::{Camera, CameraTick, ViewTransform, cull};
use tracing::{debug, error, warn};

use crate::{ChartConfig, ChartError};

/// Interaction mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Clicking selects, dragging pans.
    #[default]
    View,
    /// Dragging a card restructures the chart.
    Edit,
}

type RenderContent<P, C> = Box<dyn FnMut(&Record<P>) -> C>;
type OnNodeClick = Box<dyn FnMut(&RecordId)>;
type OnNodeDrop = Box<dyn FnMut(&RecordId, &RecordId) -> bool>;
type OnDataChange<P> = Box<dyn FnMut(&[Record<P>])>;

pub(crate) struct Hooks<P, C> {
    pub(crate) render_content: RenderContent<P, C>,
    pub(crate) on_node_click: Option<OnNodeClick>,
    pub(crate) on_node_drop: Option<OnNodeDrop>,
    pub(crate) on_data_change: Option<OnDataChange<P>>,
}

impl<P, C> fmt::Debug for Hooks<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_node_click", &self.on_node_click.is_some())
            .field("on_node_drop", &self.on_node_drop.is_some())
            .field("on_data_change", &self.on_data_change.is_some())
            .finish_non_exhaustive()
    }
}

/// Hierarchy and layout derived from the current records.
#[derive(Debug)]
pub(crate) struct Derived {
    pub(crate) tree: Hierarchy,
    pub(crate) layout: Layout,
}

/// What the pointer is doing between down and up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Gesture {
    /// Pressed on something that reacts only to a click.
    Press,
    /// Dragging the canvas; holds the last screen position.
    Pan(Point),
    /// Dragging a card.
    Drag,
}

/// Configures and creates an [`OrgChart`].
pub struct OrgChartBuilder<P, C> {
    size: Size,
    config: ChartConfig,
    hooks: Hooks<P, C>,
}

impl<P, C> fmt::Debug for OrgChartBuilder<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrgChartBuilder")
            .field("size", &self.size)
            .field("config", &self.config)
            .field("hooks", &self.hooks)
            .finish()
    }
}

impl<P, C> OrgChartBuilder<P, C> {
    /// Replaces the default configuration.
    #[must_use]
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Called with the id of a node the user selects by clicking.
    #[must_use]
    pub fn on_node_click(mut self, hook: impl FnMut(&RecordId) + 'static) -> Self {
        self.hooks.on_node_click = Some(Box::new(hook));
        self
    }

    /// Called with `(moved, target)` before a drop is applied. Returning
    /// `false` cancels the drop.
    #[must_use]
    pub fn on_node_drop(
        mut self,
        hook: impl FnMut(&RecordId, &RecordId) -> bool + 'static,
    ) -> Self {
        self.hooks.on_node_drop = Some(Box::new(hook));
        self
    }

    /// Called with the full record list after every applied edit.
    #[must_use]
    pub fn on_data_change(mut self, hook: impl FnMut(&[Record<P>]) + 'static) -> Self {
        self.hooks.on_data_change = Some(Box::new(hook));
        self
    }

    /// Creates the chart. Nothing is shown until [`OrgChart::render`].
    #[must_use]
    pub fn build(self) -> OrgChart<P, C> {
        let config = self.config;
        let camera = Camera::new(self.size)
            .with_scale_extent(config.min_scale, config.max_scale)
            .with_duration_ms(config.camera_duration_ms)
            .with_top_margin(config.top_margin);
        OrgChart {
            metrics: config.metrics(),
            scene: Scene::new(config.animation_duration_ms),
            click: ClickState::new(config.click_distance),
            config,
            hooks: self.hooks,
            records: Vec::new(),
            derived: None,
            camera,
            mode: Mode::View,
            drag: DragController::new(),
            gesture: None,
        }
    }
}

/// A headless org chart.
///
/// The chart holds a private copy of the records, the tree and layout derived
/// from them, the camera, and the materialized [`Scene`] a host paints. All
/// work happens synchronously inside the calls below; the host drives
/// transitions by calling [`OrgChart::tick`] once per frame.
///
/// Failures never panic and never leave partial state behind: the operation is
/// logged, the previous state is kept, and an error is returned.
pub struct OrgChart<P, C> {
    pub(crate) config: ChartConfig,
    pub(crate) metrics: NodeMetrics,
    pub(crate) hooks: Hooks<P, C>,
    pub(crate) records: Vec<Record<P>>,
    pub(crate) derived: Option<Derived>,
    pub(crate) camera: Camera,
    pub(crate) scene: Scene<C>,
    pub(crate) mode: Mode,
    pub(crate) click: ClickState<HitTarget>,
    pub(crate) drag: DragController<C>,
    pub(crate) gesture: Option<Gesture>,
}

impl<P: fmt::Debug, C: fmt::Debug> fmt::Debug for OrgChart<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrgChart")
            .field("config", &self.config)
            .field("records", &self.records.len())
            .field("mode", &self.mode)
            .field("transform", &self.camera.transform())
            .field("scene", &self.scene)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

/// Preview state of an ongoing drag.
#[derive(Clone, Copy, Debug)]
pub struct DragFeedback<'a, C> {
    /// The floating card.
    pub ghost: &'a Ghost<C>,
    /// Highlight for the current drop target.
    pub indicator: Option<&'a DropIndicator>,
}

impl<P, C> OrgChart<P, C> {
    /// Starts a builder for a container of `size` screen pixels.
    ///
    /// `render_content` turns a record into whatever the host paints inside a
    /// card.
    pub fn builder(
        size: Size,
        render_content: impl FnMut(&Record<P>) -> C + 'static,
    ) -> OrgChartBuilder<P, C> {
        OrgChartBuilder {
            size,
            config: ChartConfig::default(),
            hooks: Hooks {
                render_content: Box::new(render_content),
                on_node_click: None,
                on_node_drop: None,
                on_data_change: None,
            },
        }
    }

    /// Replaces all records and redraws.
    ///
    /// On the first successful render, nodes at or beyond
    /// [`ChartConfig::default_expand_depth`] start collapsed and the view is
    /// reset to the root. Later renders keep the current collapse state.
    pub fn render(&mut self, records: Vec<Record<P>>) -> Result<(), ChartError> {
        self.rebuild(records, None)
    }

    pub(crate) fn rebuild(
        &mut self,
        records: Vec<Record<P>>,
        reveal: Option<&RecordId>,
    ) -> Result<(), ChartError> {
        let _span = tracing::debug_span!("rebuild", records = records.len()).entered();
        let mut tree = match Hierarchy::build(&records) {
            Ok(tree) => tree,
            Err(err) => {
                error!(%err, "cannot build hierarchy; keeping the previous chart");
                return Err(err.into());
            }
        };

        let first = self.derived.is_none();
        match &self.derived {
            None => {
                if let Some(depth) = self.config.default_expand_depth {
                    tree.collapse_from_depth(depth);
                }
            }
            Some(previous) => {
                tree.collapse_ids(previous.tree.collapsed_ids());
                tree.inherit_positions(&previous.tree);
            }
        }
        if let Some(idx) = reveal.and_then(|id| tree.find(id.as_str())) {
            tree.expand(idx);
        }

        // An in-flight drag refers to the old tree.
        if self.drag.cancel() {
            self.scene.set_dragging(None);
            self.gesture = None;
        }

        let layout = Layout::compute(&mut tree, &self.metrics);
        let root = tree.root();
        let root_position = layout.placement(root).map(|p| p.position);
        self.records = records;
        self.derived = Some(Derived { tree, layout });

        if first && let Some(position) = root_position {
            self.camera.reset(position, false);
        }
        self.refresh(UpdateKind::Layout { source: root });
        Ok(())
    }

    /// Re-runs the layout after an expand/collapse change and animates the scene.
    pub(crate) fn relayout(&mut self, source: NodeIdx) {
        let Some(derived) = &mut self.derived else {
            return;
        };
        derived.layout = Layout::compute(&mut derived.tree, &self.metrics);
        self.refresh(UpdateKind::Layout { source });
    }

    /// Culls against the current transform and reconciles the scene.
    pub(crate) fn refresh(&mut self, kind: UpdateKind) {
        let Some(derived) = &self.derived else {
            return;
        };
        let buffer = match kind {
            UpdateKind::Viewport if !self.scene.is_animating() => self.config.viewport_buffer,
            _ => self.config.layout_buffer,
        };
        let rect = self
            .camera
            .transform()
            .visible_rect(self.camera.size(), buffer);
        let visible = cull(&derived.layout, &self.metrics, rect);
        let records = &self.records;
        let render = &mut self.hooks.render_content;
        let stats = self
            .scene
            .reconcile(&derived.tree, &visible, kind, |p| render(&records[p.node.index()]));
        debug!(
            entered = stats.entered,
            updated = stats.updated,
            exited = stats.exited,
            viewport = matches!(kind, UpdateKind::Viewport),
            "reconciled scene"
        );
    }

    fn require(&self, id: &str) -> Result<NodeIdx, ChartError> {
        let Some(derived) = &self.derived else {
            warn!(id, "no chart rendered");
            return Err(ChartError::NoData);
        };
        derived.tree.find(id).ok_or_else(|| {
            warn!(id, "node not found");
            ChartError::NodeNotFound(id.into())
        })
    }

    /// Switches between viewing and editing. Leaving edit mode ends any drag.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == Mode::View {
            self.cancel_drag();
        }
        self.mode = mode;
    }

    /// Abandons an ongoing drag without applying anything.
    pub fn cancel_drag(&mut self) {
        if self.drag.cancel() {
            debug!("drag cancelled");
            self.scene.set_dragging(None);
            self.click.cancel();
            self.gesture = None;
        }
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Animates the view to show every laid-out node.
    pub fn fit_to_screen(&mut self) -> Result<(), ChartError> {
        let bounds = self
            .derived
            .as_ref()
            .and_then(|d| d.layout.bounds(&self.metrics));
        let Some(bounds) = bounds else {
            warn!("fit_to_screen before render");
            return Err(ChartError::NoData);
        };
        self.camera.fit(bounds);
        Ok(())
    }

    /// Puts the root at the top center at scale 1.
    pub fn reset_view(&mut self, animate: bool) -> Result<(), ChartError> {
        let root = self.derived.as_ref().and_then(|d| {
            let root = d.tree.root();
            d.layout.placement(root).map(|p| p.position)
        });
        let Some(root) = root else {
            warn!("reset_view before render");
            return Err(ChartError::NoData);
        };
        self.camera.reset(root, animate);
        if !animate {
            self.refresh(UpdateKind::Viewport);
        }
        Ok(())
    }

    /// Selects a node, reveals it by expanding its ancestors, and animates the
    /// view to center it at scale 1.
    pub fn center_node(&mut self, id: &str) -> Result<(), ChartError> {
        let idx = self.require(id)?;
        self.scene.set_selected(Some(id.into()));
        let Some(derived) = &mut self.derived else {
            return Err(ChartError::NoData);
        };
        let expanded = derived.tree.expand_path_to(idx);
        debug!(id, expanded, "centering node");
        let root = derived.tree.root();
        self.relayout(root);

        let position = self
            .derived
            .as_ref()
            .and_then(|d| d.layout.placement(idx))
            .map(|p| p.position);
        let Some(position) = position else {
            return Err(ChartError::NodeNotFound(id.into()));
        };
        self.camera.center_on(position);
        Ok(())
    }

    /// Moves the selection highlight. `None` clears it.
    pub fn set_selected(&mut self, id: Option<&str>) -> Result<(), ChartError> {
        if let Some(id) = id {
            self.require(id)?;
        }
        self.scene.set_selected(id.map(RecordId::from));
        Ok(())
    }

    /// Selected node id.
    #[must_use]
    pub fn selected(&self) -> Option<&RecordId> {
        self.scene.selected()
    }

    /// Expands or collapses a node. Leaves are left alone.
    pub fn toggle(&mut self, id: &str) -> Result<(), ChartError> {
        let idx = self.require(id)?;
        let Some(derived) = &mut self.derived else {
            return Err(ChartError::NoData);
        };
        if derived.tree.toggle(idx) {
            self.relayout(idx);
        }
        Ok(())
    }

    /// Updates the container size.
    pub fn resize(&mut self, size: Size) {
        self.camera.set_size(size);
        self.refresh(UpdateKind::Viewport);
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.camera.pan_by(delta);
        self.refresh(UpdateKind::Viewport);
    }

    /// Zooms by `factor` around a screen point.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        self.camera.zoom_at(anchor, factor);
        self.refresh(UpdateKind::Viewport);
    }

    /// Advances camera and scene transitions to `now_ms`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.camera.tick(now_ms) {
            CameraTick::Idle => {}
            CameraTick::Moved | CameraTick::Settled => self.refresh(UpdateKind::Viewport),
        }
        let scene_moving = self.scene.tick(now_ms);
        scene_moving || self.camera.is_animating()
    }

    /// The caller's records as last rendered or edited.
    #[must_use]
    pub fn records(&self) -> &[Record<P>] {
        &self.records
    }

    /// The materialized scene.
    #[must_use]
    pub fn scene(&self) -> &Scene<C> {
        &self.scene
    }

    /// The current view transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.camera.transform()
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The derived tree, once rendered.
    #[must_use]
    pub fn hierarchy(&self) -> Option<&Hierarchy> {
        self.derived.as_ref().map(|d| &d.tree)
    }

    /// The current layout, once rendered.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.derived.as_ref().map(|d| &d.layout)
    }

    /// Card dimensions in use.
    #[must_use]
    pub fn metrics(&self) -> &NodeMetrics {
        &self.metrics
    }

    /// The configuration the chart was built with.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Ghost and drop indicator while a drag is in progress.
    #[must_use]
    pub fn drag_feedback(&self) -> Option<DragFeedback<'_, C>> {
        Some(DragFeedback {
            ghost: self.drag.ghost()?,
            indicator: self.drag.indicator(),
        })
    }
}
