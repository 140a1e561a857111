use std::path::Path;
use std::process::ExitCode;

use crate::config::OutputConfig;
use crate::error::IconError;
use crate::export::{export_icon_container, export_raster};
use crate::icon::compose;

/// One full run: compose, write the PNG, then every ICO copy.
/// `on_written` sees each path right after it lands on disk.
pub fn generate(
    cfg: &OutputConfig,
    mut on_written: impl FnMut(&Path),
) -> Result<(), IconError> {
    let canvas = compose(cfg.design, cfg.canvas_size)?;

    export_raster(&canvas, &cfg.png_path)?;
    on_written(&cfg.png_path);

    for path in &cfg.ico_paths {
        export_icon_container(&canvas, &cfg.ico_sizes, path)?;
        on_written(path);
    }
    Ok(())
}

/// Runs `generate`, printing each written path and logging a failure once.
pub fn run(cfg: &OutputConfig) -> Result<(), IconError> {
    let result = generate(cfg, |path| println!("Wrote {}", path.display()));
    if let Err(e) = &result {
        crate::logger::log_error("icon generation failed", e);
    }
    result
}

/// Entry point shared by the generator binaries. The error is already
/// logged by `run`, so only the exit status is reported here.
pub fn run_main(cfg: &OutputConfig) -> ExitCode {
    match run(cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
