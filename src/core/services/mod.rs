mod text_extractor;
mod writing_analyzer;

pub use text_extractor::TextExtractor;
pub use writing_analyzer::WritingAnalyzer;

#[cfg(test)]
pub(crate) use writing_analyzer::ANALYSIS_INSTRUCTIONS;
