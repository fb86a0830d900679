mod feed;
mod intent;
mod panel;
mod reducer;
mod state;

pub use feed::{Notification, NotificationFeed};
pub use intent::NotificationIntent;
pub use panel::render_notification_panel;
pub use reducer::NotificationReducer;
pub use state::NotificationPanelState;
