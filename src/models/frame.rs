// ============================================================================
// FRAME CONTEXT - What the host client tells us about the session
// ============================================================================

use serde::{Deserialize, Serialize};

/// Context handed over by the host frame SDK on startup
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameContext {
    #[serde(default)]
    pub user: Option<FrameUser>,
    #[serde(default)]
    pub client: Option<FrameClient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameUser {
    pub fid: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub pfp_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameClient {
    pub client_fid: u64,
    #[serde(default)]
    pub added: bool,
}

impl FrameContext {
    /// Parse the JSON payload returned by the bridge
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Parse error: {}", e))
    }

    /// Name for log lines: username, then display name, then fid
    pub fn user_label(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        Some(
            user.username
                .clone()
                .or_else(|| user.display_name.clone())
                .unwrap_or_else(|| format!("fid:{}", user.fid)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_context() {
        let json = r#"{
            "user": {"fid": 6841, "username": "deodad", "displayName": "Tony", "pfpUrl": "https://i.imgur.com/x.png"},
            "client": {"clientFid": 9152, "added": true},
            "location": {"type": "launcher"}
        }"#;
        let ctx = FrameContext::from_json(json).unwrap();
        let user = ctx.user.clone().unwrap();
        assert_eq!(user.fid, 6841);
        assert_eq!(user.display_name.as_deref(), Some("Tony"));
        assert_eq!(ctx.client, Some(FrameClient { client_fid: 9152, added: true }));
        assert_eq!(ctx.user_label().as_deref(), Some("deodad"));
    }

    #[test]
    fn test_parse_empty_context() {
        let ctx = FrameContext::from_json("{}").unwrap();
        assert_eq!(ctx, FrameContext::default());
        assert_eq!(ctx.user_label(), None);
    }

    #[test]
    fn test_user_label_falls_back_to_fid() {
        let ctx = FrameContext::from_json(r#"{"user": {"fid": 3}}"#).unwrap();
        assert_eq!(ctx.user_label().as_deref(), Some("fid:3"));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(FrameContext::from_json("undefined").is_err());
    }
}
