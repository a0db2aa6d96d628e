use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(about = "In-memory todo list web server", long_about = None)]
pub struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
