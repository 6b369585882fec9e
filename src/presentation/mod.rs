mod analysis_report_view;
mod console_command;

pub use analysis_report_view::{render_image_summary, render_stage_status, AnalysisReportView};
pub use console_command::ConsoleCommand;
