//! Presentation settings for serialised metrics.

/// Decimal places applied when metrics are written out.
///
/// Defaults: distances 2, load CV 3, per-facility scores 3, macro-F1 and
/// accuracy 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    distance_decimals: u32,
    balance_decimals: u32,
    per_facility_decimals: u32,
    summary_decimals: u32,
    pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            distance_decimals: 2,
            balance_decimals: 3,
            per_facility_decimals: 3,
            summary_decimals: 4,
            pretty: true,
        }
    }
}

impl OutputConfig {
    /// Set decimals for mean/max/sd distance.
    pub fn with_distance_decimals(mut self, decimals: u32) -> Self {
        self.distance_decimals = decimals;
        self
    }

    /// Set decimals for the load coefficient of variation.
    pub fn with_balance_decimals(mut self, decimals: u32) -> Self {
        self.balance_decimals = decimals;
        self
    }

    /// Set decimals for per-facility precision/recall/F1.
    pub fn with_per_facility_decimals(mut self, decimals: u32) -> Self {
        self.per_facility_decimals = decimals;
        self
    }

    /// Set decimals for macro-F1 and accuracy.
    pub fn with_summary_decimals(mut self, decimals: u32) -> Self {
        self.summary_decimals = decimals;
        self
    }

    /// Pretty-print JSON (default) or emit it on one line.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn distance_decimals(&self) -> u32 {
        self.distance_decimals
    }

    pub fn balance_decimals(&self) -> u32 {
        self.balance_decimals
    }

    pub fn per_facility_decimals(&self) -> u32 {
        self.per_facility_decimals
    }

    pub fn summary_decimals(&self) -> u32 {
        self.summary_decimals
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
