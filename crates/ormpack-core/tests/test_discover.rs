use std::fs;
use std::path::Path;

use ormpack_core::discover::{find_pairs, split_suffix, SuffixTag};
use ormpack_core::error::OrmpackError;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").unwrap();
}

#[test]
fn test_split_suffix_cs() {
    let parsed = split_suffix(Path::new("brick_wall_CS.png"));
    assert!(matches!(
        parsed,
        Some((ref p, SuffixTag::ColorSmooth)) if p == "brick_wall"
    ));
}

#[test]
fn test_split_suffix_nam() {
    let parsed = split_suffix(Path::new("/some/dir/brick_wall_NAM.tga"));
    assert!(matches!(
        parsed,
        Some((ref p, SuffixTag::NormalAoMetal)) if p == "brick_wall"
    ));
}

#[test]
fn test_split_suffix_rejects_unrelated_names() {
    assert!(split_suffix(Path::new("brick_wall.png")).is_none());
    assert!(split_suffix(Path::new("brick_wall_cs.png")).is_none());
    assert!(split_suffix(Path::new("readme.txt")).is_none());
}

#[test]
fn test_find_pairs_keeps_only_complete_pairs() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "brick_CS.png");
    touch(dir.path(), "brick_NAM.png");
    touch(dir.path(), "orphan_CS.png");
    touch(dir.path(), "lonely_NAM.png");
    touch(dir.path(), "notes.txt");
    fs::create_dir(dir.path().join("sub_CS.png")).unwrap();

    let pairs = find_pairs(dir.path()).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].prefix, "brick");
    assert!(pairs[0].color_smooth.ends_with("brick_CS.png"));
    assert!(pairs[0].normal_ao_metal.ends_with("brick_NAM.png"));
}

#[test]
fn test_find_pairs_sorts_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    for name in [
        "Zebra_CS.png",
        "Zebra_NAM.png",
        "apple_CS.png",
        "apple_NAM.png",
        "Mango_CS.png",
        "Mango_NAM.png",
    ] {
        touch(dir.path(), name);
    }

    let pairs = find_pairs(dir.path()).unwrap();
    let prefixes: Vec<&str> = pairs.iter().map(|p| p.prefix.as_str()).collect();
    assert_eq!(prefixes, ["apple", "Mango", "Zebra"]);
}

#[test]
fn test_find_pairs_prefix_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "Stone_CS.png");
    touch(dir.path(), "stone_NAM.png");

    let pairs = find_pairs(dir.path()).unwrap();
    assert!(pairs.is_empty());
}

#[test]
fn test_find_pairs_empty_folder_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let pairs = find_pairs(dir.path()).unwrap();
    assert!(pairs.is_empty());
}

#[test]
fn test_find_pairs_rejects_non_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not_a_dir.png");
    fs::write(&file, b"").unwrap();

    let err = find_pairs(&file).unwrap_err();
    assert!(matches!(err, OrmpackError::NotADirectory(_)));
}
