pub mod jacoco;

use crate::error::Result;
use crate::model::ReportCounts;

/// Every report parser implements this trait.
pub trait Parser {
    /// Parse the input bytes into summed instruction and branch counters.
    fn parse(&self, input: &[u8]) -> Result<ReportCounts>;
}
