use crate::domain::model::{Duration, Service};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "fitnessedge")]
#[command(about = "Quote FitnessEdge membership plans and talk to the site's endpoints")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Price a plan
    Quote {
        /// Comma separated: gym, pt (personal-training), nutrition
        #[arg(long, value_delimiter = ',', default_value = "gym")]
        services: Vec<Service>,

        /// Commitment in months: 1, 3, 6 or 12
        #[arg(long, default_value = "1")]
        duration: Duration,

        /// Print the quote as JSON instead of labels
        #[arg(long)]
        json: bool,
    },

    /// Print the rate table
    Rates,

    /// Build the "lock in this rate" link for a plan
    Link {
        #[arg(long, value_delimiter = ',', default_value = "gym")]
        services: Vec<Service>,

        #[arg(long, default_value = "1")]
        duration: Duration,
    },

    /// Send the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// Free-text interest; taken from --from-link when omitted
        #[arg(long)]
        interest: Option<String>,

        /// A lock-in link to prefill the interest from
        #[arg(long)]
        from_link: Option<String>,

        #[arg(long)]
        message: Option<String>,
    },

    /// Read the visit counter
    Visits {
        /// Count a visit before reading
        #[arg(long)]
        increment: bool,
    },
}
