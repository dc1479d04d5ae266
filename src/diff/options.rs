use serde::{Deserialize, Serialize};

pub const DEFAULT_SEQUENCE_ALIGNMENT_MAX_LENGTH: usize = 100;
pub const DEFAULT_OPTIMIZATION_ITERATIONS: usize = 2;

/// How the common run between two arrays is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentStrategy {
    /// Align around the single longest common run; everything before and
    /// after it is compared position by position.
    #[default]
    SingleAnchor,

    /// Keep anchoring inside the unmatched prefix and suffix until no common
    /// run is left. Smaller patches for arrays with several independent edits,
    /// at a higher comparison cost.
    Recursive,
}

/// Tuning knobs of the diff engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Arrays longer than this on either side skip alignment and are
    /// compared position by position.
    ///
    /// The positional comparison is linear, but it can leave many equal
    /// values on both sides (a reversed array, for instance). The move pass
    /// then rebases every operation between each fused pair, which is
    /// quadratic in the number of emitted operations. Lower
    /// `optimization_iterations` to 0 to skip it for very large inputs.
    pub sequence_alignment_max_length: usize,

    /// Number of alternating move/replace optimization rounds.
    pub optimization_iterations: usize,

    pub alignment: AlignmentStrategy,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            sequence_alignment_max_length: DEFAULT_SEQUENCE_ALIGNMENT_MAX_LENGTH,
            optimization_iterations: DEFAULT_OPTIMIZATION_ITERATIONS,
            alignment: AlignmentStrategy::default(),
        }
    }
}
