//! Artboard sessions: snapshot several views onto one artboard.

use sketchsnap_core::SnapError;
use sketchsnap_document::{make_artboard, Artboard, Group};
use sketchsnap_layout::ContentNode;

use crate::builder::{default_should_expand, make_group, make_group_with};
use crate::config::SessionConfig;
use crate::controller::{top_controller, ControllerSource};
use crate::view::ViewSource;

/// Collects snapshots. Each snap call adds one batch.
#[derive(Debug, Default)]
pub struct ArtboardSession {
    groups: Vec<Vec<Group>>,
}

impl ArtboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `view` as its own batch.
    pub fn snap_view<V: ViewSource>(&mut self, view: &V, name: &str) -> Result<(), SnapError> {
        self.snap_view_with(view, name, &default_should_expand)
    }

    /// Snapshot `view` with a custom expansion policy.
    pub fn snap_view_with<V, F>(&mut self, view: &V, name: &str, should_expand: &F) -> Result<(), SnapError>
    where
        V: ViewSource,
        F: Fn(&ContentNode) -> bool,
    {
        let group = make_group_with(view, name, should_expand)?;
        tracing::debug!(snapshot = name, batch = self.groups.len(), "snapped view");
        self.groups.push(vec![group]);
        Ok(())
    }

    /// Snapshot a whole window, including every presented layer on it.
    pub fn snap_window<V: ViewSource>(&mut self, window: &V, name: &str) -> Result<(), SnapError> {
        tracing::debug!(snapshot = name, window = window.name(), "snapping window");
        self.snap_view(window, name)
    }

    /// Snapshot the view of the controller currently in front of `root`.
    ///
    /// See [`top_controller`] for how containers are followed.
    pub fn snap_top_view_controller<C: ControllerSource>(&mut self, root: &C, name: &str) -> Result<(), SnapError> {
        let top = top_controller(root)?;
        tracing::debug!(snapshot = name, view = top.view().name(), "resolved top controller");
        self.snap_view(top.view(), name)
    }

    /// Snapshot several views into a single batch, stacked along the secondary axis.
    pub fn snap_views<V: ViewSource>(&mut self, views: &[(&V, &str)]) -> Result<(), SnapError> {
        let batch = views
            .iter()
            .map(|(view, name)| make_group(*view, name))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(snapshots = batch.len(), batch = self.groups.len(), "snapped views");
        self.groups.push(batch);
        Ok(())
    }

    /// Number of snapshots taken.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arrange the snapshots and assemble them into an artboard.
    pub fn finish(self, name: &str, config: &SessionConfig) -> Artboard {
        let groups = config.stack_layout().arrange(self.groups);
        make_artboard(groups, config.insets, name, config.artboard_color)
    }
}

/// Run `handler` against a fresh session and return the resulting artboard.
///
/// Snapshots are stacked per `config`, then wrapped in an artboard with the
/// configured insets and background.
pub fn artboard_session<F>(name: &str, config: &SessionConfig, handler: F) -> Result<Artboard, SnapError>
where
    F: FnOnce(&mut ArtboardSession) -> Result<(), SnapError>,
{
    let mut session = ArtboardSession::new();
    handler(&mut session)?;

    if session.is_empty() {
        tracing::warn!(artboard = name, "artboard session took no snapshots");
    }

    Ok(session.finish(name, config))
}
