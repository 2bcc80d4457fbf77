// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password with the simple policy
    Simple {
        /// Password length (defaults to the configured length)
        #[arg(long, value_parser = clap::value_parser!(u16).range(4..=128))]
        length: Option<u16>,

        /// Save the password under this username
        #[arg(long)]
        username: Option<String>,
    },

    /// Generate a password from selected character types
    Selective {
        /// Password length (defaults to the configured length)
        #[arg(long, value_parser = clap::value_parser!(u16).range(4..=128))]
        length: Option<u16>,

        /// Include uppercase letters
        #[arg(long)]
        uppercase: bool,

        /// Include lowercase letters
        #[arg(long)]
        lowercase: bool,

        /// Include digits
        #[arg(long)]
        digits: bool,

        /// Include special characters
        #[arg(long)]
        special: bool,

        /// Save the password under this username
        #[arg(long)]
        username: Option<String>,
    },

    /// Generate a password containing specific literal characters
    Required {
        /// Password length (defaults to the configured length)
        #[arg(long, value_parser = clap::value_parser!(u16).range(4..=128))]
        length: Option<u16>,

        /// Required uppercase letters (e.g. ABC)
        #[arg(long, default_value = "")]
        uppercase: String,

        /// Required lowercase letters (e.g. abc)
        #[arg(long, default_value = "")]
        lowercase: String,

        /// Required digits (e.g. 123)
        #[arg(long, default_value = "")]
        digits: String,

        /// Required special characters (e.g. !@#)
        #[arg(long, default_value = "")]
        special: String,

        /// Save the password under this username
        #[arg(long)]
        username: Option<String>,
    },
}
