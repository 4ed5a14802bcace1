//! Extraction over real files and directories on disk.

use std::fs;

use gambol_docgen::Extractor;
use tempfile::tempdir;

const LIFT_BLOCK: &str = "/**\n * Class: Lift\n *\n * A moving platform.\n */\n";
const DEEP_BLOCK: &str = "/**\n * Class: Deep\n *\n * Buried in a subdirectory.\n */\n";
const STRAY_BLOCK: &str = "/**\n * Class: Stray\n *\n * Lives in a text file.\n */\n";

#[test]
fn directory_walk_takes_only_native_source_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lift.cpp"), LIFT_BLOCK).unwrap();
    fs::write(dir.path().join("notes.txt"), STRAY_BLOCK).unwrap();
    fs::write(dir.path().join("readme.md"), "# engine\n").unwrap();

    let mut extractor = Extractor::new();
    extractor.scan_paths(&[dir.path().to_path_buf()]).unwrap();

    let names: Vec<&str> = extractor.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Lift"]);
    assert!(extractor.warnings().is_empty());
}

#[test]
fn directory_walk_descends_into_subdirectories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lift.cpp"), LIFT_BLOCK).unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/deep.hpp"), DEEP_BLOCK).unwrap();

    let mut extractor = Extractor::new();
    extractor.scan_paths(&[dir.path().to_path_buf()]).unwrap();

    let names: Vec<&str> = extractor.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Deep", "Lift"]);
}

#[test]
fn files_named_directly_are_scanned_regardless_of_extension() {
    let dir = tempdir().unwrap();
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, STRAY_BLOCK).unwrap();

    let mut extractor = Extractor::new();
    extractor.scan_paths(&[notes]).unwrap();

    assert_eq!(extractor.classes.len(), 1);
    assert_eq!(extractor.classes[0].name, "Stray");
}

#[test]
fn unreadable_path_warns_and_the_run_continues() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no_such_dir");
    fs::write(dir.path().join("lift.h"), LIFT_BLOCK).unwrap();

    let mut extractor = Extractor::new();
    extractor
        .scan_paths(&[missing.clone(), dir.path().join("lift.h")])
        .unwrap();

    assert_eq!(
        extractor.warnings(),
        [format!("Cannot read '{}'. Ignoring.", missing.display())]
    );
    assert_eq!(extractor.classes.len(), 1);
}
