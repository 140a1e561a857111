use std::process::ExitCode;

use robot_icon::{Design, OutputConfig, config, logger};

fn main() -> ExitCode {
    logger::init();
    let cfg = OutputConfig::for_design(Design::Robot, &config::base_dir());
    robot_icon::run_main(&cfg)
}
