use serde::{Deserialize, Serialize};

/// Requested dashboard view, matched exhaustively by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Line plot of price versus date plus a short summary.
    Chart,
    /// Full descriptive statistics table.
    Analysis,
}
