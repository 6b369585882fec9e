pub const APPLICATION_NAME: &str = "Handwriting Analyzer";
pub const APPLICATION_TITLE: &str = "AI Handwriting Analyzer";
pub const CONFIG_DIRECTORY_NAME: &str = "handwriting-analyzer";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const ENV_GEMINI_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_VISION_API_KEY: &str = "GOOGLE_CLOUD_VISION_API_KEY";
pub const ENV_VISION_ACCESS_TOKEN: &str = "GOOGLE_CLOUD_ACCESS_TOKEN";

pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const VISION_FEATURE_TEXT_DETECTION: &str = "TEXT_DETECTION";
pub const GOOGLE_API_KEY_HEADER: &str = "x-goog-api-key";

pub const ANALYSIS_FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't analyze the text right now. Please try again.";

pub const USER_MESSAGE_EXTRACTING: &str = "Extracting text from your handwriting...";
pub const USER_MESSAGE_ANALYZING: &str = "Analyzing your writing with AI...";
pub const USER_MESSAGE_EXTRACTION_SUCCEEDED: &str = "Text extracted successfully!";
pub const USER_MESSAGE_EXTRACTION_FAILED: &str =
    "Could not extract text from the image. Please try a clearer photo.";
pub const USER_MESSAGE_NO_IMAGE: &str =
    "No image loaded yet. Enter the path of a PNG or JPEG photo first.";

pub const HEADING_EXTRACTED_TEXT: &str = "Extracted Text:";
pub const HEADING_ANALYSIS: &str = "AI Analysis & Suggestions:";

pub const PROMPT_MARKER: &str = "> ";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  ✍️  AI Handwriting Analyzer                            ║
║                                                        ║
║  Load a photo of your handwritten text for             ║
║  intelligent analysis and suggestions!                 ║
║                                                        ║
║  Type 'help' for instructions, 'quit' to exit          ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;

pub const HELP_TEXT: &str = r#"How to use
  1. Take a clear photo of your handwritten text
  2. Load it by typing its path (or: open <path>)
  3. Type 'analyze' to get AI suggestions

Features
  • Grammar and spelling analysis
  • Sentence structure suggestions
  • Content organization tips
  • Writing flow improvements

Commands
  <path> | open <path>   load a PNG or JPEG image
  analyze                run text extraction and writing analysis
  help                   show this message
  quit | exit            leave the session
"#;
