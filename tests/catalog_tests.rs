//! Integration tests for the curriculum catalog and its queries

use prompt_school::core::catalog::{load_catalog, validate, Catalog};
use prompt_school::core::models::Difficulty;
use prompt_school::core::text::first_sentence;
use std::fs;
use tempfile::TempDir;

const SMALL_CATALOG: &str = r#"
[[semesters]]
number = 1
name = "Basics"
difficulty = "Beginner"

[[courses]]
code = "B-1"
slug = "b-1"
title = "First"
semester = 1
difficulty = "Beginner"
description = "Start here. Then continue."

[[courses.units]]
number = 1
title = "Hello"

[[courses]]
code = "B-2"
slug = "b-2"
title = "Second"
semester = 1
difficulty = "Beginner"
prerequisites = ["b-1", "missing"]

[[courses.units]]
number = 1
title = "Again"
"#;

#[test]
fn test_builtin_catalog_shape() {
    let catalog = Catalog::builtin();

    assert_eq!(catalog.semesters().len(), 4);
    assert_eq!(catalog.len(), 14);
    assert_eq!(catalog.semesters()[0].name, "Foundations");
    assert_eq!(catalog.semesters()[3].difficulty, Difficulty::Advanced);
}

#[test]
fn test_builtin_catalog_validates_clean() {
    let report = validate(Catalog::builtin());
    assert!(report.is_clean(), "{report:?}");
}

#[test]
fn test_every_builtin_prerequisite_resolves() {
    let catalog = Catalog::builtin();
    for course in catalog.courses() {
        assert_eq!(
            catalog.prerequisites_of(course).len(),
            course.prerequisites.len(),
            "{} has an unresolved prerequisite",
            course.slug
        );
    }
}

#[test]
fn test_courses_by_semester_keeps_source_order() {
    let catalog = Catalog::builtin();

    let first: Vec<&str> = catalog
        .courses_by_semester(1)
        .iter()
        .map(|c| c.slug.as_str())
        .collect();
    assert_eq!(first, vec!["prmt-101", "prmt-102", "prmt-103", "prmt-104"]);

    let total: usize = catalog
        .semesters()
        .iter()
        .map(|s| catalog.courses_by_semester(s.number).len())
        .sum();
    assert_eq!(total, catalog.len());

    assert!(catalog.courses_by_semester(9).is_empty());
}

#[test]
fn test_slug_lookup() {
    let catalog = Catalog::builtin();

    let course = catalog.course_by_slug("prmt-203").expect("prmt-203 exists");
    assert_eq!(course.code, "PRMT-203");
    assert_eq!(course.semester, 2);

    assert!(catalog.course_by_slug("does-not-exist").is_none());
    assert!(catalog.course_by_slug("PRMT-203").is_none());
}

#[test]
fn test_neighbors_cross_semester_boundaries() {
    let catalog = Catalog::builtin();

    let first = catalog.neighbors("prmt-101").expect("first course");
    assert!(first.previous.is_none());
    assert_eq!(first.next.map(|c| c.slug.as_str()), Some("prmt-102"));

    let boundary = catalog.neighbors("prmt-104").expect("last of semester 1");
    assert_eq!(boundary.next.map(|c| c.slug.as_str()), Some("prmt-201"));

    let last = catalog.neighbors("prmt-402").expect("last course");
    assert_eq!(last.previous.map(|c| c.slug.as_str()), Some("prmt-401"));
    assert!(last.next.is_none());

    assert!(catalog.neighbors("does-not-exist").is_none());
}

#[test]
fn test_required_by() {
    let catalog = Catalog::builtin();

    let unlocks: Vec<&str> = catalog
        .required_by("prmt-401")
        .iter()
        .map(|c| c.slug.as_str())
        .collect();
    assert_eq!(unlocks, vec!["prmt-402"]);
    assert!(catalog.required_by("prmt-402").is_empty());
}

#[test]
fn test_every_builtin_summary_is_one_sentence() {
    for course in Catalog::builtin().courses() {
        let summary = course.summary();
        assert!(!summary.is_empty(), "{} has an empty summary", course.slug);
        assert_eq!(first_sentence(summary), summary);
    }
}

#[test]
fn test_load_catalog_from_toml_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("small.toml");
    fs::write(&path, SMALL_CATALOG).expect("Failed to write data file");

    let catalog = load_catalog(&path).expect("small catalog loads with warnings");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.courses()[0].summary(), "Start here.");

    let second = catalog.course_by_slug("b-2").expect("b-2 exists");
    let prereqs: Vec<&str> = catalog
        .prerequisites_of(second)
        .iter()
        .map(|c| c.code.as_str())
        .collect();
    assert_eq!(prereqs, vec!["B-1"]);
}

#[test]
fn test_load_catalog_rejects_invalid_data() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, SMALL_CATALOG.replace("slug = \"b-2\"", "slug = \"b-1\""))
        .expect("Failed to write data file");

    let err = load_catalog(&path).expect_err("duplicate slug must fail");
    assert!(err.to_string().contains("Duplicate course slug 'b-1'"));
}

#[test]
fn test_load_catalog_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    assert!(load_catalog(temp_dir.path().join("nope.toml")).is_err());
}
