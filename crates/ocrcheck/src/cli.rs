use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "ocrcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run OCR over an image and check the recognized text against a query",
    long_about = None
)]
pub struct App {
    /// Image file to recognize
    pub image: PathBuf,

    /// Text to look for in the recognized output. Two sentinels are
    /// recognized: 'vuoto' expects empty output, 'non-vuoto' expects
    /// any non-empty output. Anything else is matched as a
    /// case-insensitive substring.
    pub query: String,

    /// Language tags passed to the OCR engine
    #[arg(long, default_value = ocrcheck_engine::DEFAULT_LANGUAGES)]
    pub languages: String,
}
