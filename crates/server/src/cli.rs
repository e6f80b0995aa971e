use std::path::PathBuf;

use clap::Parser;
use utils::path::DEFAULT_SOCKET_PATH;

#[derive(Debug, Parser)]
#[command(name = "volumes-service", about = "Stores values files for the guest over a unix socket")]
pub struct Cli {
    /// Unix domain socket to listen on
    #[arg(long, default_value = DEFAULT_SOCKET_PATH)]
    pub socket: PathBuf,
}
