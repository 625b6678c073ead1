use clap::Parser;

/// Audits the metrics bucket for hours where a cluster reported nothing.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// First day to audit (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// Last day to audit, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,
}
