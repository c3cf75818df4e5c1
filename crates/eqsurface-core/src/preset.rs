//! Preset catalog and exact-match detection
//!
//! Presets are immutable named value vectors. The editor only ever reads them:
//! it applies a preset by name and, after every settled change, asks which
//! preset (if any) matches the live values exactly.

use crate::band::DEFAULT_BAND_COUNT;

/// Name of the all-zero preset
pub const FLAT_PRESET: &str = "Flat";

/// A named set of band values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: String,
    pub values: Vec<i32>,
}

impl Preset {
    /// Create a preset normalised to `band_count` values (truncated or zero-padded)
    pub fn new(name: impl Into<String>, values: &[i32], band_count: usize) -> Self {
        Self {
            name: name.into(),
            values: (0..band_count)
                .map(|i| values.get(i).copied().unwrap_or(0))
                .collect(),
        }
    }
}

/// Read-only source of presets consumed by the editor
pub trait PresetCatalog {
    /// Preset names in catalog order
    fn preset_names(&self) -> Vec<String>;

    /// Values for a preset, looked up case-insensitively
    ///
    /// Unknown names fall back to the first catalog entry; an empty catalog
    /// yields all zeros.
    fn values_for_preset(&self, name: &str) -> Vec<i32>;
}

/// Outcome of matching live values against a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetMatch {
    /// The values equal this preset elementwise
    Named(String),
    /// No preset matches
    Custom,
}

impl PresetMatch {
    /// Preset name, `None` for custom values
    pub fn name(&self) -> Option<&str> {
        match self {
            PresetMatch::Named(name) => Some(name),
            PresetMatch::Custom => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, PresetMatch::Custom)
    }
}

impl std::fmt::Display for PresetMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetMatch::Named(name) => write!(f, "{}", name),
            PresetMatch::Custom => write!(f, "Custom"),
        }
    }
}

/// Find the first preset whose values equal `values` exactly
pub fn detect_preset<C: PresetCatalog + ?Sized>(catalog: &C, values: &[i32]) -> PresetMatch {
    catalog
        .preset_names()
        .into_iter()
        .find(|name| catalog.values_for_preset(name) == values)
        .map(PresetMatch::Named)
        .unwrap_or(PresetMatch::Custom)
}

/// Case-insensitive name lookup returning the catalog's own spelling
pub fn find_preset_name<C: PresetCatalog + ?Sized>(catalog: &C, name: &str) -> Option<String> {
    match_preset_name(&catalog.preset_names(), name).map(str::to_string)
}

/// Case-insensitive lookup in a list of preset names, first match wins
pub fn match_preset_name<'a>(names: &'a [String], name: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(String::as_str)
}

/// The built-in preset table
#[derive(Debug, Clone)]
pub struct BuiltinPresets {
    presets: Vec<Preset>,
    band_count: usize,
}

impl Default for BuiltinPresets {
    fn default() -> Self {
        Self::new(DEFAULT_BAND_COUNT)
    }
}

impl BuiltinPresets {
    /// Build the reference table, normalising every entry to `band_count` values
    pub fn new(band_count: usize) -> Self {
        const TABLE: [(&str, [i32; 10]); 9] = [
            (FLAT_PRESET, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            ("Rock", [-1, 3, 5, 4, 1, -1, -2, -1, 2, 4]),
            ("Pop", [-1, 2, 4, 5, 3, -1, -2, -1, 1, 2]),
            ("Jazz", [0, 2, 3, 2, 0, -1, -1, 0, 2, 3]),
            ("Classical", [0, 1, 2, 3, 4, 3, 2, 1, 0, 0]),
            ("Vocal", [-2, -1, 2, 4, 5, 4, 2, 1, 0, 1]),
            ("Dance", [2, 4, 6, 4, 0, -2, -1, 2, 4, 5]),
            ("Bass Boost", [8, 7, 6, 4, 2, 0, -1, -2, -3, -4]),
            ("Treble Boost", [-4, -3, -2, -1, 0, 2, 4, 6, 7, 8]),
        ];

        Self {
            presets: TABLE
                .iter()
                .map(|(name, values)| Preset::new(*name, values, band_count))
                .collect(),
            band_count,
        }
    }

    /// Build a catalog from explicit presets
    pub fn from_presets(presets: Vec<Preset>, band_count: usize) -> Self {
        Self {
            presets: presets
                .into_iter()
                .map(|p| Preset::new(p.name, &p.values, band_count))
                .collect(),
            band_count,
        }
    }

    /// All presets in catalog order
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }
}

impl PresetCatalog for BuiltinPresets {
    fn preset_names(&self) -> Vec<String> {
        self.presets.iter().map(|p| p.name.clone()).collect()
    }

    fn values_for_preset(&self, name: &str) -> Vec<i32> {
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .or_else(|| self.presets.first())
            .map(|p| p.values.clone())
            .unwrap_or_else(|| vec![0; self.band_count])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_in_order() {
        let catalog = BuiltinPresets::default();
        let names = catalog.preset_names();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Flat");
        assert_eq!(names[1], "Rock");
        assert_eq!(names[8], "Treble Boost");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = BuiltinPresets::default();
        assert_eq!(
            catalog.values_for_preset("rOcK"),
            vec![-1, 3, 5, 4, 1, -1, -2, -1, 2, 4]
        );
    }

    #[test]
    fn test_unknown_name_falls_back_to_first() {
        let catalog = BuiltinPresets::default();
        assert_eq!(catalog.values_for_preset("Polka"), vec![0; 10]);
    }

    #[test]
    fn test_empty_catalog_yields_zeros() {
        let catalog = BuiltinPresets::from_presets(Vec::new(), 4);
        assert!(catalog.preset_names().is_empty());
        assert_eq!(catalog.values_for_preset("Flat"), vec![0; 4]);
    }

    #[test]
    fn test_presets_are_normalised() {
        let short = BuiltinPresets::new(3);
        assert_eq!(short.values_for_preset("Rock"), vec![-1, 3, 5]);

        let long = BuiltinPresets::new(12);
        assert_eq!(long.values_for_preset("Rock").len(), 12);
        assert_eq!(&long.values_for_preset("Rock")[10..], &[0, 0]);
    }

    #[test]
    fn test_detect_exact_match() {
        let catalog = BuiltinPresets::default();
        let jazz = catalog.values_for_preset("Jazz");
        assert_eq!(
            detect_preset(&catalog, &jazz),
            PresetMatch::Named("Jazz".to_string())
        );
    }

    #[test]
    fn test_detect_requires_exact_values() {
        let catalog = BuiltinPresets::default();
        let mut values = catalog.values_for_preset("Jazz");
        values[9] += 1;
        assert_eq!(detect_preset(&catalog, &values), PresetMatch::Custom);
    }

    #[test]
    fn test_detect_first_entry_wins() {
        let catalog = BuiltinPresets::from_presets(
            vec![
                Preset::new("Zero", &[], 2),
                Preset::new("Also Zero", &[0, 0], 2),
            ],
            2,
        );
        assert_eq!(
            detect_preset(&catalog, &[0, 0]),
            PresetMatch::Named("Zero".to_string())
        );
    }

    #[test]
    fn test_find_preset_name_returns_canonical_spelling() {
        let catalog = BuiltinPresets::default();
        assert_eq!(find_preset_name(&catalog, "bass boost").as_deref(), Some("Bass Boost"));
        assert_eq!(find_preset_name(&catalog, "Polka"), None);
    }

    #[test]
    fn test_match_preset_name_first_wins() {
        let names = vec!["Warm".to_string(), "WARM".to_string()];
        assert_eq!(match_preset_name(&names, "warm"), Some("Warm"));
        assert_eq!(match_preset_name(&[], "warm"), None);
    }

    #[test]
    fn test_preset_match_display() {
        assert_eq!(PresetMatch::Named("Pop".into()).to_string(), "Pop");
        assert_eq!(PresetMatch::Custom.to_string(), "Custom");
        assert!(PresetMatch::Custom.is_custom());
        assert_eq!(PresetMatch::Named("Pop".into()).name(), Some("Pop"));
    }
}
