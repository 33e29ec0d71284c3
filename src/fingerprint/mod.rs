//! Fingerprint spoofing.
//!
//! A [`DeviceProfile`] describes how the automated session should look to
//! page scripts: no webdriver flag, a believable plugin list, preferred
//! languages and a mobile portrait screen. Applying it produces one
//! [`PropertyOverride`] per field, handed to an [`EnvironmentOverlay`] that
//! installs it in whatever environment the driver controls.

pub mod overlay;
pub mod profile;

use serde_json::Value;
use tracing::debug;

pub use overlay::{InitScript, StaticEnvironment};
pub use profile::{DeviceProfile, PluginDescriptor, ProfileKind};

/// Global object a property is redefined on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentObject {
    Navigator,
    Screen,
}

impl EnvironmentObject {
    /// Name of the global as seen by page scripts.
    #[must_use]
    pub const fn global_name(self) -> &'static str {
        match self {
            Self::Navigator => "navigator",
            Self::Screen => "screen",
        }
    }
}

/// Value a redefined property reports when read.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideValue {
    /// The property reads as `undefined`.
    Undefined,
    Json(Value),
}

/// One redefined read-only property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyOverride {
    pub target: EnvironmentObject,
    pub property: &'static str,
    pub value: OverrideValue,
}

impl PropertyOverride {
    pub(crate) fn new(target: EnvironmentObject, property: &'static str, value: OverrideValue) -> Self {
        Self { target, property, value }
    }
}

/// Something that can install property getters into a browsing environment.
///
/// Overlays are write-only: once installed a getter stays for the life of the
/// session.
pub trait EnvironmentOverlay {
    fn define_getter(&mut self, property: &PropertyOverride);
}

/// Install every override of `profile` into `overlay`.
///
/// Must run before any page script executes. One-shot: no return value, no
/// retry.
pub fn apply_fingerprint_profile<O: EnvironmentOverlay + ?Sized>(profile: &DeviceProfile, overlay: &mut O) {
    let overrides = profile.overrides();
    for property in &overrides {
        overlay.define_getter(property);
    }
    debug!(
        overrides = overrides.len(),
        width = profile.screen_width,
        height = profile.screen_height,
        "fingerprint profile applied"
    );
}
