//! Widget configuration.

use serde::Deserialize;

pub const DEFAULT_MOUNT_ID: &str = "app";

/// Where the widget mounts and what it counts from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Id of the pre-existing element the widget attaches to.
    pub mount_id: String,
    pub initial_count: i64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            initial_count: 0,
        }
    }
}

impl WidgetConfig {
    pub fn with_mount_id(mut self, mount_id: impl Into<String>) -> Self {
        self.mount_id = mount_id.into();
        self
    }

    pub fn with_initial_count(mut self, initial_count: i64) -> Self {
        self.initial_count = initial_count;
        self
    }
}
