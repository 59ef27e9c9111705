//! Folding configuration.

/// Default bound on the number of enumerated structures.
pub const DEFAULT_MAX_FOLDINGS: usize = 100;

/// Configuration of a `Folder`.
///
/// # Examples
///
/// ```
/// use nf_folding::FoldConfig;
///
/// let config = FoldConfig::default()
///     .with_max_foldings(10)
///     .with_min_hairpin(3);
/// assert_eq!(config.max_foldings, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldConfig {
    /// Upper bound on distinct (partial) structures tracked during
    /// enumeration, and therefore on the structures returned. 0 disables
    /// enumeration.
    pub max_foldings: usize,

    /// A pair (i, j) within one chain needs `j - i > min_hairpin`.
    /// Pairs between the two chains of a paired fold are not restricted.
    pub min_hairpin: usize,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            max_foldings: DEFAULT_MAX_FOLDINGS,
            min_hairpin: 0,
        }
    }
}

impl FoldConfig {
    pub fn with_max_foldings(mut self, max_foldings: usize) -> Self {
        self.max_foldings = max_foldings;
        self
    }

    pub fn with_min_hairpin(mut self, min_hairpin: usize) -> Self {
        self.min_hairpin = min_hairpin;
        self
    }
}
