//! Keyboard proximity cost model for letters.

use rustc_hash::FxHashMap;

use super::{validate_threshold, CostModel};
use crate::error::Result;

/// Default threshold of [`KeyboardLayout`].
///
/// At 1.9 every key reaches its horizontal neighbours and the keys directly
/// above and below it, but not keys two columns away.
pub const DEFAULT_KEYBOARD_THRESHOLD: f64 = 1.9;

/// Letter rows of a QWERTY keyboard, top to bottom.
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Soft substitution between letters whose keys are close together.
///
/// Each key has a 2-D position `(row, column + row / 3)`; the one-third
/// offset per row approximates the stagger of a physical keyboard. For keys
/// whose Euclidean distance `d` is below the threshold the soft weight is
/// `d / (2 * threshold)`, so every soft substitution costs less than half
/// the default flat penalty.
///
/// Letters that are not on the layout (upper case, digits, punctuation)
/// never soft-match. Exact copies of them are still free through the copy
/// arcs of the edit factors.
///
/// ```rust
/// use wfst_edit::cost::{CostModel, KeyboardLayout};
///
/// let keyboard = KeyboardLayout::default();
/// assert_eq!(keyboard.cost(&'q', &'q'), Some(0.0));
/// assert!(keyboard.cost(&'q', &'w').unwrap() < 0.5);
/// assert_eq!(keyboard.cost(&'q', &'p'), None);
/// ```
#[derive(Clone, Debug)]
pub struct KeyboardLayout {
    positions: FxHashMap<char, (f64, f64)>,
    threshold: f64,
}

impl KeyboardLayout {
    /// QWERTY layout with the given distance threshold.
    pub fn qwerty(threshold: f64) -> Result<Self> {
        Self::from_rows(&QWERTY_ROWS, threshold)
    }

    /// Build a layout from letter rows, top to bottom.
    ///
    /// Row `r` is shifted right by `r / 3` of a key. A letter appearing in
    /// several rows keeps its last position.
    pub fn from_rows(rows: &[&str], threshold: f64) -> Result<Self> {
        Ok(Self {
            positions: key_positions(rows),
            threshold: validate_threshold(threshold)?,
        })
    }

    /// The configured threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Position of `key`, if it is on the layout.
    pub fn position(&self, key: char) -> Option<(f64, f64)> {
        self.positions.get(&key).copied()
    }

    /// Euclidean distance between two keys on the layout.
    pub fn distance(&self, a: char, b: char) -> Option<f64> {
        let (ra, ca) = self.position(a)?;
        let (rb, cb) = self.position(b)?;
        Some(((ra - rb).powi(2) + (ca - cb).powi(2)).sqrt())
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self {
            positions: key_positions(&QWERTY_ROWS),
            threshold: DEFAULT_KEYBOARD_THRESHOLD,
        }
    }
}

fn key_positions(rows: &[&str]) -> FxHashMap<char, (f64, f64)> {
    let mut positions = FxHashMap::default();
    for (row, keys) in rows.iter().enumerate() {
        let offset = row as f64 / 3.0;
        for (col, key) in keys.chars().enumerate() {
            positions.insert(key, (row as f64, col as f64 + offset));
        }
    }
    positions
}

impl CostModel<char> for KeyboardLayout {
    fn cost(&self, source: &char, target: &char) -> Option<f64> {
        let distance = self.distance(*source, *target)?;
        (distance < self.threshold).then(|| distance / (2.0 * self.threshold))
    }
}
