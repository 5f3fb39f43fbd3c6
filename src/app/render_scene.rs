//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let preview = state
        .editor
        .tool_manager
        .active_tool()
        .map(|tool| tool.preview())
        .unwrap_or_default();

    RenderScene {
        shapes: state.shapes.clone(),
        active_shape: preview.active_shape,
        effective_cursor: preview.effective_cursor,
        close_snap_ring: preview.close_snap_ring,
        snap_guide: preview.snap_guide,
        hovered_point: state.point_edit.hover,
        selected_point: state.point_edit.selected,
        drag_close_ring: state.point_edit.active_drag.and_then(|d| d.close_ring),
        options: state.options.clone(),
    }
}
