use std::fs::File;
use std::path::{Path, PathBuf};

use ico::IconDir;
use robot_icon::config::ICO_SIZES;
use robot_icon::export::{export_icon_container, export_raster};
use robot_icon::{Design, IconError, OutputConfig, compose, generate, run, run_main};

fn read_ico(path: &Path) -> IconDir {
    IconDir::read(File::open(path).unwrap()).unwrap()
}

#[test]
fn robot_png_matches_canvas() {
    let tmp = tempfile::tempdir().unwrap();
    let png = tmp.path().join("build").join("appicon.png");

    let canvas = compose(Design::Robot, 1024).unwrap();
    export_raster(&canvas, &png).unwrap();

    let written = image::open(&png).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (1024, 1024));
    assert_eq!(written.get_pixel(0, 0).0[3], 0);
    assert_eq!(written.get_pixel(300, 350).0, [255, 255, 255, 255]);
    assert_eq!(written.get_pixel(350, 350).0[3], 255);
    assert_eq!(written.as_raw(), canvas.as_raw());
}

#[test]
fn ico_holds_each_configured_size_once() {
    let tmp = tempfile::tempdir().unwrap();
    let ico_path = tmp.path().join("icon.ico");

    let canvas = compose(Design::Robot, 1024).unwrap();
    export_icon_container(&canvas, &ICO_SIZES, &ico_path).unwrap();

    let dir = read_ico(&ico_path);
    let dims: Vec<_> = dir.entries().iter().map(|e| (e.width(), e.height())).collect();
    let expected: Vec<_> = ICO_SIZES.iter().map(|&s| (s, s)).collect();
    assert_eq!(dims, expected);
}

#[test]
fn ico_entries_decode_to_their_declared_size() {
    let tmp = tempfile::tempdir().unwrap();
    let ico_path = tmp.path().join("icon.ico");

    let canvas = compose(Design::Simple, 512).unwrap();
    export_icon_container(&canvas, &[48, 16], &ico_path).unwrap();

    for entry in read_ico(&ico_path).entries() {
        let image = entry.decode().unwrap();
        assert_eq!((image.width(), image.height()), (entry.width(), entry.height()));
        assert_eq!(
            image.rgba_data().len(),
            (image.width() * image.height() * 4) as usize
        );
    }
}

#[test]
fn generate_robot_writes_png_and_ico() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = OutputConfig::for_design(Design::Robot, tmp.path());

    let mut written: Vec<PathBuf> = Vec::new();
    generate(&cfg, |p| written.push(p.to_path_buf())).unwrap();

    assert_eq!(
        written,
        vec![
            tmp.path().join("build/appicon.png"),
            tmp.path().join("build/windows/icon.ico"),
        ]
    );
    assert_eq!(read_ico(&written[1]).entries().len(), ICO_SIZES.len());
}

#[test]
fn generate_simple_writes_root_copy() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = OutputConfig::for_design(Design::Simple, tmp.path());

    generate(&cfg, |_| {}).unwrap();

    let png = image::open(tmp.path().join("build/appicon.png")).unwrap();
    assert_eq!((png.width(), png.height()), (512, 512));
    let nested = std::fs::read(tmp.path().join("build/windows/icon.ico")).unwrap();
    let root = std::fs::read(tmp.path().join("icon.ico")).unwrap();
    assert_eq!(nested, root);
}

#[test]
fn rerun_overwrites_with_identical_pixels() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = OutputConfig::for_design(Design::Simple, tmp.path());

    generate(&cfg, |_| {}).unwrap();
    let first = image::open(&cfg.png_path).unwrap().to_rgba8();
    generate(&cfg, |_| {}).unwrap();
    let second = image::open(&cfg.png_path).unwrap().to_rgba8();

    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn run_returns_io_error_when_build_dir_is_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("build"), b"not a directory").unwrap();
    let cfg = OutputConfig::for_design(Design::Robot, tmp.path());

    let err = run(&cfg).unwrap_err();

    match err {
        IconError::Io { path, .. } => assert!(path.starts_with(tmp.path())),
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(!tmp.path().join("build/windows/icon.ico").exists());
}

#[test]
fn run_main_reports_failure_as_exit_status() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("build"), b"not a directory").unwrap();
    let cfg = OutputConfig::for_design(Design::Simple, tmp.path());

    let code = run_main(&cfg);

    assert_eq!(
        format!("{code:?}"),
        format!("{:?}", std::process::ExitCode::FAILURE)
    );
    assert!(!tmp.path().join("icon.ico").exists());
}
