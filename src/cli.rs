// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "flycam")]
#[command(about = "Free-fly camera and model transform demo", long_about = None)]
pub struct Cli {
    /// Path to a JSON controller config file
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Only apply mouse-look while the look button is held
    #[arg(long = "gate-look", default_value = "false")]
    pub gate_look: bool,

    /// Keep camera movement keys active while the mode modifier is held
    #[arg(long = "free-move-always", default_value = "false")]
    pub free_move_always: bool,
}
