// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use clap::Parser;

use pose_angles::cli::args::{Cli, Commands};
use pose_angles::cli::run::{run_angle, run_coords, run_joints};
use pose_angles::error;

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Angle(args) => run_angle(args),
        Commands::Coords(args) => run_coords(args),
        Commands::Joints => {
            run_joints();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}
