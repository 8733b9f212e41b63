// Integration tests for the batch driver: one icon{size}.png per configured
// size, sizes independent of each other, IO failures surfaced as errors.

use std::env;
use std::fs;
use std::path::PathBuf;

use icon_forge::config::Config;
use icon_forge::error::IconError;
use icon_forge::generate::{generate_icons, icon_jobs, IconJob};
use icon_forge::recipe::Recipe;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("icon-forge-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_generates_one_file_per_size() {
    let dir = scratch_dir("per-size");
    let jobs: Vec<IconJob> = [16u32, 48, 128]
        .iter()
        .map(|&size| IconJob {
            size,
            path: dir.join(format!("icon{}.png", size)),
        })
        .collect();

    generate_icons(Recipe::Record, &jobs).unwrap();

    for size in [16u32, 48, 128] {
        let png = fs::read(dir.join(format!("icon{}.png", size))).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), size);
        assert_eq!(img.height(), size);
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_icon_jobs_follow_config() {
    let config = Config::default();
    let jobs = icon_jobs(&config);

    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[0].size, 16);
    assert_eq!(jobs[0].path, PathBuf::from("./icon16.png"));
    assert_eq!(jobs[2].path, PathBuf::from("./icon128.png"));
}

#[test]
fn test_icon_jobs_respect_output_dir() {
    let config = Config {
        sizes: vec![32],
        output_dir: PathBuf::from("assets"),
        ..Config::default()
    };
    let jobs = icon_jobs(&config);

    assert_eq!(jobs, vec![IconJob {
        size: 32,
        path: PathBuf::from("assets/icon32.png"),
    }]);
}

#[test]
fn test_unwritable_destination_surfaces_io_error() {
    // Parent directory is never created, so the write must fail
    let dir = env::temp_dir()
        .join("icon-forge-missing-parent")
        .join(format!("nested-{}", std::process::id()));
    let jobs = [IconJob {
        size: 16,
        path: dir.join("icon16.png"),
    }];

    assert!(matches!(
        generate_icons(Recipe::Record, &jobs),
        Err(IconError::Io(_))
    ));
}

#[test]
fn test_earlier_files_survive_a_later_failure() {
    let dir = scratch_dir("partial");
    let jobs = [
        IconJob {
            size: 16,
            path: dir.join("icon16.png"),
        },
        IconJob {
            size: 48,
            path: dir.join("no-such-dir").join("icon48.png"),
        },
    ];

    assert!(generate_icons(Recipe::Playback, &jobs).is_err());
    // The first job's output stays on disk; there is no rollback
    assert!(dir.join("icon16.png").exists());

    fs::remove_dir_all(&dir).unwrap();
}
