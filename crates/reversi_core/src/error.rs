use thiserror::Error;

use crate::types::Disc;

/// Errors surfaced by the fallible core surfaces (validated move entry,
/// notation and diagram parsing). The search itself never produces these;
/// depth, time and terminal positions are ordinary values there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{coord} is not a legal placement for {side:?}")]
    IllegalMove { coord: String, side: Disc },

    #[error("invalid coordinate '{0}'")]
    BadCoordinate(String),

    #[error("invalid board diagram: {0}")]
    BadDiagram(String),
}
