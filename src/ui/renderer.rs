//! Top-level rendering coordinator.
//!
//! Rendering is two steps:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! Output goes to stdout via `print!`; the screen is not cleared and the
//! plugin runtime owns the cursor between frames.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout for a `rows` x `cols` pane.
///
/// Colors come from [`AppState::effective_theme`], so site branding applies
/// as soon as settings arrive.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let theme = state.effective_theme();

    components::render_layout(&viewmodel, &theme, rows, cols);
}
