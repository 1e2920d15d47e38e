//! Top-level rendering entry point.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the host state, then
//! hand it to the components. The view model is returned so the host can keep
//! its [`Layout`](crate::ui::viewmodel::Layout) for hit testing.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the widget pane to stdout and returns the view model drawn.
///
/// Also pushes the selector's current boundary to its pointer subscription, so
/// outside-interaction detection always matches what is on screen.
///
/// # Parameters
///
/// * `state` - Host state
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) -> UIViewModel {
    let viewmodel = state.compute_viewmodel(rows, cols);
    state
        .widget
        .selector()
        .update_bounds(viewmodel.layout.selector_regions.iter().copied());

    components::render_widget(&viewmodel, &state.theme, cols, rows);
    viewmodel
}
