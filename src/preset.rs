//! Named settings presets.
//!
//! A preset is an explicit user-saved snapshot of a calculator card,
//! scoped to one instrument or universal. The collection enforces the
//! at-most-one-default invariant structurally: every default change
//! rebuilds the whole collection instead of flipping flags in place,
//! so two presets can never claim the default simultaneously.

use crate::session::CalculatorSettings;

/// What a preset applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetScope {
    /// Applicable to every instrument.
    Universal,
    /// Applicable to one instrument id.
    Instrument(String),
}

impl PresetScope {
    /// True if the preset applies to the given instrument.
    pub fn matches(&self, instrument_id: &str) -> bool {
        match self {
            PresetScope::Universal => true,
            PresetScope::Instrument(id) => id == instrument_id,
        }
    }
}

/// A saved settings snapshot.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub scope: PresetScope,
    pub is_default: bool,
    pub settings: CalculatorSettings,
}

/// The preset collection.
///
/// ```
/// use tickrisk::{CalculatorSettings, Preset, PresetBook, PresetScope};
///
/// let mut book = PresetBook::new();
/// book.save(Preset {
///     id: "1".into(),
///     name: "Scalp".into(),
///     scope: PresetScope::Instrument("MES".into()),
///     is_default: false,
///     settings: CalculatorSettings::default(),
/// });
///
/// book.set_default("1");
/// assert_eq!(book.default_preset().unwrap().name, "Scalp");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PresetBook {
    presets: Vec<Preset>,
}

impl PresetBook {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an externally produced collection, repairing the default
    /// invariant if it was violated (the first default wins).
    pub fn from_presets(mut presets: Vec<Preset>) -> Self {
        if let Some(keep) = presets.iter().position(|p| p.is_default) {
            for (i, preset) in presets.iter_mut().enumerate() {
                preset.is_default = i == keep;
            }
        }
        Self { presets }
    }

    /// Add a preset. Newly saved presets never start as the default.
    pub fn save(&mut self, mut preset: Preset) {
        preset.is_default = false;
        self.presets.push(preset);
    }

    /// Rename a preset. Returns false if the id is unknown.
    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        match self.presets.iter_mut().find(|p| p.id == id) {
            Some(preset) => {
                preset.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Delete a preset. Returns false if the id is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != id);
        self.presets.len() != before
    }

    /// Make one preset the default, clearing every other default flag.
    /// The whole collection is rebuilt in one pass.
    pub fn set_default(&mut self, id: &str) {
        self.presets = self
            .presets
            .drain(..)
            .map(|mut p| {
                p.is_default = p.id == id;
                p
            })
            .collect();
    }

    /// Clear the default flag everywhere.
    pub fn clear_default(&mut self) {
        for preset in &mut self.presets {
            preset.is_default = false;
        }
    }

    /// The current default preset, if any.
    pub fn default_preset(&self) -> Option<&Preset> {
        self.presets.iter().find(|p| p.is_default)
    }

    /// Presets applicable to an instrument (universal ones included).
    pub fn for_instrument<'a>(
        &'a self,
        instrument_id: &'a str,
    ) -> impl Iterator<Item = &'a Preset> {
        self.presets.iter().filter(move |p| p.scope.matches(instrument_id))
    }

    /// All presets in save order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
