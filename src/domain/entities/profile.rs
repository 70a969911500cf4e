use serde::{Deserialize, Serialize};

/// Game account profile returned by a lookup adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupProfile {
    pub user_id: String,
    pub zone_id: String,
    pub nickname: String,
    pub level: Option<u32>,
    pub rank: Option<String>,
    pub hero: Option<String>,
    /// Percentage, 0-100
    pub win_rate: Option<f32>,
    pub matches: Option<u32>,
}

impl LookupProfile {
    pub fn new(user_id: impl Into<String>, zone_id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            zone_id: zone_id.into(),
            nickname: nickname.into(),
            level: None,
            rank: None,
            hero: None,
            win_rate: None,
            matches: None,
        }
    }
}
