use serde::{Deserialize, Serialize};

/// A generated character as echoed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CharacterRequest {
    pub name: String,
    pub role: String,
    pub appearance: String,
}

impl From<CharacterRequest> for Character {
    fn from(req: CharacterRequest) -> Self {
        Self {
            name: Some(req.name),
            role: Some(req.role),
            appearance: Some(req.appearance),
            personality: None,
        }
    }
}
