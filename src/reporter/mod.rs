pub mod json;
pub mod terminal;

use crate::aggregator::ScanReport;

pub trait Reporter {
    fn report(&self, report: &ScanReport) -> String;
}
