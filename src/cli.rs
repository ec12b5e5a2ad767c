use clap::Parser;
use clap::builder::BoolishValueParser;

#[derive(Parser, Debug)]
#[command(name = "sheet-cards")]
#[command(about = "Serve flashcards from a Google Sheet as JSON")]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Expose /debug/env and include error kinds in error responses
    #[arg(long, env = "CARDS_DEBUG", default_value_t = false, value_parser = BoolishValueParser::new())]
    pub debug: bool,
}
