//! Use-Case: Vom Zeichen-Werkzeug abgeschlossene Form übernehmen.

use crate::app::AppState;
use crate::core::Measurement;

/// Legt eine fertige Form im Shape-Store ab und gibt sie mit vergebener ID zurück.
pub fn store_completed_shape(state: &mut AppState, mut measurement: Measurement) -> Measurement {
    state.record_undo_snapshot();
    let id = state.shapes_mut().insert(measurement.clone());
    measurement.set_id(id);
    log::info!("{:?} {} abgeschlossen", measurement.kind(), id);
    measurement
}
