use std::fs;

use directory_site::{ensure_output_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("site").join("nested");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("index.html", "hello").unwrap();
    assert_eq!(first.path.file_name().unwrap(), "index.html");
    assert_eq!(first.bytes, 5);
    assert_eq!(fs::read_to_string(&first.path).unwrap(), "hello");

    let second = writer.write("index.html", "world!").unwrap();
    assert_eq!(first.path, second.path);
    assert_eq!(second.bytes, 6);
    assert_eq!(fs::read_to_string(&second.path).unwrap(), "world!");
}

#[test]
fn leaves_no_temp_files_behind() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    writer.write("a.html", "a").unwrap();
    writer.write("b.json", "{}").unwrap();

    let mut names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.html", "b.json"]);
}

#[test]
fn no_partial_file_when_target_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("index.html", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("index.html").exists());
}

#[test]
fn failed_swap_keeps_previous_target() {
    let temp = TempDir::new().unwrap();
    let blocked = temp.path().join("index.html");
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("keep.txt"), "previous").unwrap();

    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    assert!(writer.write("index.html", "new page").is_err());

    assert_eq!(fs::read_to_string(blocked.join("keep.txt")).unwrap(), "previous");
    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["index.html"]);
}
