mod fit_summary;
mod regression_report;
mod variable_summary;

pub use fit_summary::FitSummary;
pub use regression_report::{Report, ReportFormat};
pub use variable_summary::VariableSummary;
