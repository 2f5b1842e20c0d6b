use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub api_base: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientSettings {
    /// Joins the base address and an endpoint path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if base.is_empty() {
            format!("/{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}
