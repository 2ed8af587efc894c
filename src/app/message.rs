// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::footer;
use crate::ui::main_panel;
use crate::ui::notifications;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; the rest come from subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    MainPanel(main_panel::Message),
    Footer(footer::Message),
    Notification(notifications::NotificationMessage),
    /// Escape was pressed anywhere in the window.
    EscapePressed,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SPOTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional seed manifest, replacing the one from settings.
    pub seed: Option<String>,
}
