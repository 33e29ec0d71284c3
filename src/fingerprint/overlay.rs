//! Overlay implementations.

use std::collections::HashMap;

use super::{EnvironmentObject, EnvironmentOverlay, OverrideValue, PropertyOverride};

/// Renders overrides into a script to inject before any page script runs.
///
/// ```rust
/// use rs_feedpost::fingerprint::{apply_fingerprint_profile, DeviceProfile, InitScript};
///
/// let mut script = InitScript::new();
/// apply_fingerprint_profile(&DeviceProfile::primary(), &mut script);
///
/// let source = script.render();
/// assert!(source.contains("Object.defineProperty(navigator, 'webdriver', { get: () => undefined })"));
/// assert!(source.contains("Object.defineProperty(screen, 'width', { get: () => 375 })"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitScript {
    statements: Vec<String>,
}

impl InitScript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of getters defined so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// The full script, wrapped in an IIFE.
    #[must_use]
    pub fn render(&self) -> String {
        let body: String = self
            .statements
            .iter()
            .map(|statement| format!("    {statement}\n"))
            .collect();
        format!("(() => {{\n{body}}})();\n")
    }
}

impl EnvironmentOverlay for InitScript {
    fn define_getter(&mut self, property: &PropertyOverride) {
        // serde_json output is a valid JS expression.
        let literal = match &property.value {
            OverrideValue::Undefined => "undefined".to_string(),
            OverrideValue::Json(value) => value.to_string(),
        };
        self.statements.push(format!(
            "Object.defineProperty({}, '{}', {{ get: () => {literal} }});",
            property.target.global_name(),
            property.property,
        ));
    }
}

/// In-memory environment answering property reads.
///
/// A property that was never defined reads as `None`; one defined as
/// undefined reads as `Some(&OverrideValue::Undefined)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticEnvironment {
    properties: HashMap<(EnvironmentObject, &'static str), OverrideValue>,
}

impl StaticEnvironment {
    #[must_use]
    pub fn get(&self, target: EnvironmentObject, property: &str) -> Option<&OverrideValue> {
        self.properties
            .iter()
            .find(|((obj, name), _)| *obj == target && *name == property)
            .map(|(_, value)| value)
    }

    /// Integer reading of a property, e.g. `screen.width`.
    #[must_use]
    pub fn get_u64(&self, target: EnvironmentObject, property: &str) -> Option<u64> {
        match self.get(target, property)? {
            OverrideValue::Json(value) => value.as_u64(),
            OverrideValue::Undefined => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl EnvironmentOverlay for StaticEnvironment {
    fn define_getter(&mut self, property: &PropertyOverride) {
        self.properties
            .insert((property.target, property.property), property.value.clone());
    }
}
