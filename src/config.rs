use std::path::{Path, PathBuf};

use crate::layout::Design;

/// ICO directory sizes, primary entry first.
pub const ICO_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

const PNG_PATH: &str = "build/appicon.png";
const ICO_PATH: &str = "build/windows/icon.ico";
/// Extra copy the simple generator drops next to the manifest.
const ROOT_ICO_PATH: &str = "icon.ico";

/// Crate root; output paths are relative to it.
pub fn base_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Where and how one generator run writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub design: Design,
    pub canvas_size: u32,
    pub png_path: PathBuf,
    pub ico_paths: Vec<PathBuf>,
    pub ico_sizes: Vec<u32>,
}

impl OutputConfig {
    pub fn for_design(design: Design, base: &Path) -> Self {
        let mut ico_paths = vec![base.join(ICO_PATH)];
        if design == Design::Simple {
            ico_paths.push(base.join(ROOT_ICO_PATH));
        }
        Self {
            design,
            canvas_size: design.reference_size(),
            png_path: base.join(PNG_PATH),
            ico_paths,
            ico_sizes: ICO_SIZES.to_vec(),
        }
    }
}
