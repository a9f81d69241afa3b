use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "web-helper",
    about = "Small helpers around web APIs, printing JSON.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        about = "Get the YT video details",
        long_about = "Request the YT video details from the YT API and return the details in JSON format."
    )]
    Yt(YtCommand),
}

#[derive(Debug, Parser)]
pub struct YtCommand {
    #[arg(short = 'v', long = "videoId", value_name = "ID", help = "The video ID")]
    pub video_id: Option<String>,
}

impl YtCommand {
    /// The video id, if one was given and is not empty.
    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Prints the help of `subcommand`, or of the whole program when `None`.
pub fn print_help(subcommand: Option<&str>) -> std::io::Result<()> {
    let mut command = Cli::command();
    command.build();
    if let Some(name) = subcommand {
        if let Some(subcommand) = command.find_subcommand_mut(name) {
            return subcommand.print_help();
        }
    }
    command.print_help()
}
