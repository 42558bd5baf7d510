/*!
Data structures shared by the prefix inferencer, the directory scanner and the scan report.
*/
mod outcome;
mod prefix;
mod report;

pub use outcome::*;
pub use prefix::*;
pub use report::*;
