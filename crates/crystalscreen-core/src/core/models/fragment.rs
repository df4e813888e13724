use crate::core::tables::fragments;
use serde::Serialize;
use std::collections::BTreeMap;

/// Whether an ionizable group donates or accepts a proton at physiological pH.
///
/// `VeryWeakAcid` marks groups (indole NH, aliphatic OH, thiol) whose pKa is
/// too high to matter pharmacologically but that still rank as acids when
/// nothing stronger is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IonizationKind {
    Acid,
    Base,
    VeryWeakAcid,
}

impl IonizationKind {
    pub fn is_acidic(&self) -> bool {
        matches!(self, IonizationKind::Acid | IonizationKind::VeryWeakAcid)
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, IonizationKind::Base)
    }
}

/// The pKa annotation of an ionizable fragment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PkaAnnotation {
    pub value: f64,
    pub kind: IonizationKind,
}

/// The closed vocabulary of structural fragments recognized by the group
/// contribution tables.
///
/// Keeping this a closed enumeration (rather than free-text labels) means a
/// misspelled fragment is a compile error, not a silent zero contribution.
/// External string-keyed inputs are resolved through [`Fragment::from_label`],
/// which drops unknown labels instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Fragment {
    // --- Carbon skeleton ---
    Methyl,
    Methylene,
    Methine,
    QuaternaryCarbon,
    // --- Aromatic and heterocyclic rings ---
    Phenyl,
    Naphthalene,
    Pyridine,
    Imidazole,
    Morpholine,
    Piperidine,
    Piperazine,
    Pyrrolidine,
    Thiophene,
    Indole,
    // --- Oxygen ---
    HydroxylAliphatic,
    HydroxylPhenolic,
    Ether,
    CarboxylicAcid,
    Ester,
    Carbonyl,
    // --- Nitrogen ---
    AminePrimary,
    AminePrimaryAromatic,
    AmineSecondary,
    AmineTertiary,
    Nitrile,
    AmidePrimary,
    AmideSecondary,
    // --- Halogens ---
    Fluoro,
    Trifluoromethyl,
    Chloro,
    Bromo,
    Iodo,
    // --- Sulfur and phosphorus ---
    Thioether,
    Thiol,
    Sulfonyl,
    Sulfonamide,
    PhosphonicAcid,
}

impl Fragment {
    pub const COUNT: usize = 37;

    /// The per-fragment contribution record from the reference table.
    pub fn definition(&self) -> &'static FragmentDefinition {
        fragments::definition(*self)
    }

    pub fn label(&self) -> &'static str {
        self.definition().label
    }

    /// Resolves an external string key against the fixed vocabulary.
    ///
    /// Keys are matched case-insensitively with `-`, `.` and spaces folded to
    /// `_`. Returns `None` for anything outside the vocabulary; callers treat
    /// that as a zero contribution, never an error.
    pub fn from_label(label: &str) -> Option<Fragment> {
        let mut key = String::with_capacity(label.len());
        for c in label.trim().chars() {
            match c {
                '-' | '.' | ' ' => key.push('_'),
                _ => key.extend(c.to_lowercase()),
            }
        }
        fragments::VOCABULARY.get(key.as_str()).copied()
    }

    pub fn all() -> impl Iterator<Item = Fragment> {
        fragments::ALL.iter().copied()
    }
}

/// First-order group contributions for one fragment.
///
/// Units: `dispersion`/`polar` in MPa^0.5·cm³/mol, `hbond_energy` in J/mol,
/// `molar_volume` in cm³/mol, `weight` in g/mol, `tpsa` in Å²,
/// `melting_point` in °C. `molar_volume` and `melting_point` may be negative
/// (ring and branching corrections); everything else is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    pub label: &'static str,
    pub dispersion: f64,
    pub polar: f64,
    pub hbond_energy: f64,
    pub molar_volume: f64,
    pub logp: f64,
    pub weight: f64,
    pub donors: u32,
    pub acceptors: u32,
    pub tpsa: f64,
    pub rotatable_bonds: u32,
    pub melting_point: f64,
    pub pka: Option<PkaAnnotation>,
}

/// A multiset of fragments describing one molecule.
///
/// Consumed by the estimator; zero counts are never stored and insertion
/// order does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FragmentCounts(BTreeMap<Fragment, u32>);

impl FragmentCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` occurrences of a fragment. Zero is a no-op.
    pub fn add(&mut self, fragment: Fragment, n: u32) {
        if n > 0 {
            *self.0.entry(fragment).or_insert(0) += n;
        }
    }

    pub fn count(&self, fragment: Fragment) -> u32 {
        self.0.get(&fragment).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Fragment, u32)> + '_ {
        self.0.iter().map(|(&f, &n)| (f, n))
    }

    /// Builds a count map from string-keyed input, silently dropping labels
    /// outside the fixed vocabulary (forward-compatible partial inputs).
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut counts = Self::new();
        for (label, n) in labels {
            if let Some(fragment) = Fragment::from_label(label) {
                counts.add(fragment, n);
            }
        }
        counts
    }
}

impl FromIterator<(Fragment, u32)> for FragmentCounts {
    fn from_iter<I: IntoIterator<Item = (Fragment, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (fragment, n) in iter {
            counts.add(fragment, n);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_resolves_canonical_and_aliased_keys() {
        assert_eq!(Fragment::from_label("cooh"), Some(Fragment::CarboxylicAcid));
        assert_eq!(
            Fragment::from_label("carboxylic-acid"),
            Some(Fragment::CarboxylicAcid)
        );
        assert_eq!(Fragment::from_label("Aromatic-Ring"), Some(Fragment::Phenyl));
        assert_eq!(Fragment::from_label("CH3"), Some(Fragment::Methyl));
    }

    #[test]
    fn from_label_returns_none_for_unknown_keys() {
        assert_eq!(Fragment::from_label("nonexistent_group"), None);
        assert_eq!(Fragment::from_label(""), None);
    }

    #[test]
    fn from_labels_drops_unknown_keys_and_zero_counts() {
        let counts =
            FragmentCounts::from_labels([("cooh", 1), ("nonexistent_group", 5), ("ch3", 0)]);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.count(Fragment::CarboxylicAcid), 1);
    }

    #[test]
    fn add_accumulates_and_ignores_zero() {
        let mut counts = FragmentCounts::new();
        counts.add(Fragment::Methylene, 2);
        counts.add(Fragment::Methylene, 3);
        counts.add(Fragment::Phenyl, 0);
        assert_eq!(counts.count(Fragment::Methylene), 5);
        assert_eq!(counts.count(Fragment::Phenyl), 0);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn every_fragment_has_a_definition_with_its_own_label() {
        for fragment in Fragment::all() {
            assert!(!fragment.definition().label.is_empty());
        }
        assert_eq!(Fragment::all().count(), Fragment::COUNT);
    }
}
