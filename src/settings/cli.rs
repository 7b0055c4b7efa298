use super::Parser;

#[derive(Parser, Debug)]
#[command(about = "User registry HTTP service")]
pub struct Cli {
    /// Path to a settings file; defaults are used for keys it omits.
    #[arg(long)]
    pub settings: Option<String>,
}
