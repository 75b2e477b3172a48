use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "simple-ei")]
#[command(about = "Employment insurance economic region lookup by postal code")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, default_value = "config/simple-ei.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve {
        /// Override application.port from the config file
        #[arg(long)]
        port: Option<u16>,

        /// Emit logs as JSON lines
        #[arg(long)]
        json_logs: bool,
    },
    /// Look up one postal code and print the result
    Lookup {
        postal_code: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}
