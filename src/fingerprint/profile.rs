//! Device profiles.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{EnvironmentObject, OverrideValue, PropertyOverride};

/// Mobile Safari on iOS 13.
pub const IPHONE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 13_2_3 like Mac OS X) \
AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.0.3 Mobile/15E148 Safari/604.1";

/// Portrait viewport of the emulated handset.
pub const MOBILE_SCREEN_WIDTH: u32 = 375;
pub const MOBILE_SCREEN_HEIGHT: u32 = 667;

/// One entry of `navigator.plugins`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    pub name: String,
    pub filename: String,
    pub description: String,
    pub mime_type: String,
    pub suffixes: String,
}

impl PluginDescriptor {
    fn pdf(name: &str, filename: &str, mime_type: &str) -> Self {
        Self {
            name: name.to_string(),
            filename: filename.to_string(),
            description: "Portable Document Format".to_string(),
            mime_type: mime_type.to_string(),
            suffixes: "pdf".to_string(),
        }
    }

    fn chrome_pdf_plugin() -> Self {
        Self::pdf(
            "Chrome PDF Plugin",
            "internal-pdf-viewer",
            "application/x-google-chrome-pdf",
        )
    }

    fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "filename": self.filename,
            "description": self.description,
            "length": 1,
            "0": {
                "type": self.mime_type,
                "suffixes": self.suffixes,
                "description": self.description,
                "__pluginName": self.name,
            },
        })
    }
}

/// Which preset a session starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileKind {
    #[default]
    Primary,
    /// Used when the primary browser channel cannot be launched.
    Fallback,
}

/// The environment page scripts should observe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    /// Reported `navigator.webdriver`; `None` reads as `undefined`.
    pub webdriver: Option<bool>,
    pub plugins: Vec<PluginDescriptor>,
    /// Preferred languages, most preferred first.
    pub languages: Vec<String>,
    pub screen_height: u32,
    pub screen_width: u32,
    pub user_agent: String,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::primary()
    }
}

impl DeviceProfile {
    /// Full profile: two PDF viewers and a wider language list.
    #[must_use]
    pub fn primary() -> Self {
        Self {
            webdriver: None,
            plugins: vec![
                PluginDescriptor::chrome_pdf_plugin(),
                PluginDescriptor::pdf(
                    "Chrome PDF Viewer",
                    "mhjfbmdgcfjbbpaeojofohoefgiehjai",
                    "application/pdf",
                ),
            ],
            languages: languages(&["id-ID", "id", "en-US", "en", "ms"]),
            screen_height: MOBILE_SCREEN_HEIGHT,
            screen_width: MOBILE_SCREEN_WIDTH,
            user_agent: IPHONE_USER_AGENT.to_string(),
        }
    }

    /// Reduced profile: one plugin and the four core languages.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            plugins: vec![PluginDescriptor::chrome_pdf_plugin()],
            languages: languages(&["id-ID", "id", "en-US", "en"]),
            ..Self::primary()
        }
    }

    #[must_use]
    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Primary => Self::primary(),
            ProfileKind::Fallback => Self::fallback(),
        }
    }

    /// Primary profile when its browser channel is available, else fallback.
    #[must_use]
    pub fn select(primary_available: bool) -> Self {
        if primary_available {
            Self::primary()
        } else {
            Self::fallback()
        }
    }

    /// Per-field property redefinitions, navigator fields first.
    #[must_use]
    pub fn overrides(&self) -> Vec<PropertyOverride> {
        let webdriver = self
            .webdriver
            .map_or(OverrideValue::Undefined, |flag| OverrideValue::Json(Value::Bool(flag)));
        let plugins = Value::Array(self.plugins.iter().map(PluginDescriptor::to_json).collect());

        vec![
            PropertyOverride::new(EnvironmentObject::Navigator, "webdriver", webdriver),
            PropertyOverride::new(EnvironmentObject::Navigator, "plugins", OverrideValue::Json(plugins)),
            PropertyOverride::new(
                EnvironmentObject::Navigator,
                "languages",
                OverrideValue::Json(json!(self.languages)),
            ),
            PropertyOverride::new(
                EnvironmentObject::Screen,
                "height",
                OverrideValue::Json(json!(self.screen_height)),
            ),
            PropertyOverride::new(
                EnvironmentObject::Screen,
                "width",
                OverrideValue::Json(json!(self.screen_width)),
            ),
        ]
    }

    /// `Accept-Language` value with descending quality weights.
    #[must_use]
    pub fn accept_language(&self) -> String {
        let mut parts = Vec::with_capacity(self.languages.len());
        let mut quality = 10u32;
        for (i, lang) in self.languages.iter().enumerate() {
            if i == 0 {
                parts.push(lang.clone());
            } else {
                quality = quality.saturating_sub(1).max(1);
                parts.push(format!("{lang};q=0.{quality}"));
            }
        }
        parts.join(",")
    }

    /// Extra request headers matching the emulated handset.
    #[must_use]
    pub fn http_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Accept-Language", self.accept_language()),
            ("Accept-Encoding", "gzip, deflate, br".to_string()),
            (
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,\
                 */*;q=0.8,application/signed-exchange;v=b3;q=0.7"
                    .to_string(),
            ),
            ("Cache-Control", "max-age=0".to_string()),
            ("Pragma", "no-cache".to_string()),
            (
                "Sec-Ch-Ua",
                r#""Google Chrome";v="119", "Chromium";v="119", "Not?A_Brand";v="24""#.to_string(),
            ),
            ("Sec-Ch-Ua-Mobile", "?1".to_string()),
            ("Sec-Ch-Ua-Platform", "\"iOS\"".to_string()),
            ("Sec-Fetch-Dest", "document".to_string()),
            ("Sec-Fetch-Mode", "navigate".to_string()),
            ("Sec-Fetch-Site", "none".to_string()),
            ("Sec-Fetch-User", "?1".to_string()),
            ("Upgrade-Insecure-Requests", "1".to_string()),
            ("DNT", "1".to_string()),
            ("User-Agent", self.user_agent.clone()),
        ]
    }
}

fn languages(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| (*tag).to_string()).collect()
}
