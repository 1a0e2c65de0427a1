//! Terminal adapters: the dashboard renderer and an interactive notifier.

mod notifier;
mod renderer;

pub use notifier::TerminalNotifier;
pub use renderer::{render_dashboard, resource_color};
