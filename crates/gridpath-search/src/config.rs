//! Search configuration.

/// How a search records its result on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PathMarking {
    /// Only the cells of the found route become `Path`; everything else the
    /// search touched stays `Closed`.
    #[default]
    Route,
    /// Every node is marked `Path` as it is selected, so the board shows the
    /// whole expansion, not just the route.
    Expanded,
}

/// Options for a [`Planner`](crate::Planner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub marking: PathMarking,
    /// Stamp `Start` and `Finish` on the endpoints once a route is found.
    pub stamp_endpoints: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            marking: PathMarking::Route,
            stamp_endpoints: true,
        }
    }
}

impl SearchConfig {
    /// Set the marking policy (builder).
    #[inline]
    pub const fn with_marking(mut self, marking: PathMarking) -> Self {
        self.marking = marking;
        self
    }

    /// Enable or disable endpoint stamping (builder).
    #[inline]
    pub const fn with_stamp_endpoints(mut self, stamp: bool) -> Self {
        self.stamp_endpoints = stamp;
        self
    }
}
