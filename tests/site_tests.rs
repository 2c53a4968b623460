//! Integration tests for static site generation

use prompt_school::core::catalog::Catalog;
use prompt_school::core::site::{
    HtmlSite, PageStatus, Route, SiteContext, SiteGenerator, SiteSettings,
};
use std::fs;
use tempfile::TempDir;

fn render(settings: &SiteSettings, route: &Route) -> (PageStatus, String) {
    let ctx = SiteContext::new(Catalog::builtin(), settings);
    let page = HtmlSite::new()
        .render(&ctx, route)
        .expect("render should succeed");
    (page.status, page.body)
}

#[test]
fn test_generate_writes_every_page() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("site");
    let settings = SiteSettings::default();
    let catalog = Catalog::builtin();
    let ctx = SiteContext::new(catalog, &settings);

    let written = HtmlSite::new()
        .generate(&ctx, &out_dir)
        .expect("site should build");

    // home, manifesto, curriculum, 404, stylesheet, one per course
    assert_eq!(written.len(), catalog.len() + 5);
    assert!(out_dir.join("index.html").is_file());
    assert!(out_dir.join("manifesto").join("index.html").is_file());
    assert!(out_dir.join("curriculum").join("index.html").is_file());
    assert!(out_dir.join("404.html").is_file());
    assert!(out_dir.join("style.css").is_file());
    for course in catalog.courses() {
        assert!(
            out_dir
                .join("curriculum")
                .join(&course.slug)
                .join("index.html")
                .is_file(),
            "missing page for {}",
            course.slug
        );
    }
}

#[test]
fn test_generate_is_repeatable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = SiteSettings::default();
    let ctx = SiteContext::new(Catalog::builtin(), &settings);
    let site = HtmlSite::new();

    site.generate(&ctx, temp_dir.path()).expect("first build");
    let first = fs::read_to_string(temp_dir.path().join("index.html")).expect("read index");
    site.generate(&ctx, temp_dir.path()).expect("second build");
    let second = fs::read_to_string(temp_dir.path().join("index.html")).expect("read index");

    assert_eq!(first, second);
}

#[test]
fn test_curriculum_index_lists_courses_with_summaries() {
    let (status, body) = render(&SiteSettings::default(), &Route::Curriculum);

    assert_eq!(status, PageStatus::Found);
    for course in Catalog::builtin().courses() {
        assert!(body.contains(&course.code), "index is missing {}", course.code);
    }
    assert!(body.contains("Everything starts here."));
    assert!(body.contains("Requires: PRMT-101"));
}

#[test]
fn test_course_page_sections() {
    let (status, body) = render(
        &SiteSettings::default(),
        &Route::Course("prmt-101".to_string()),
    );

    assert_eq!(status, PageStatus::Found);
    assert!(body.contains("Fundamentals of Prompting"));
    assert!(body.contains("start here."));
    assert!(body.contains("<details class=\"unit\" open>"));
    assert_eq!(body.matches("<details class=\"unit\"").count(), 4);
    assert!(body.contains("Recommended Reading"));
    assert!(body.contains("PRMT-102"));
}

#[test]
fn test_course_page_lists_reading_before_office_hours() {
    let (_, body) = render(
        &SiteSettings::default(),
        &Route::Course("prmt-101".to_string()),
    );

    let reading = body.find("Recommended Reading").expect("reading section");
    let office_hours = body.find("<h2>Office Hours</h2>").expect("office hours section");
    assert!(reading < office_hours);
}

#[test]
fn test_last_course_has_no_next_link() {
    let (_, body) = render(
        &SiteSettings::default(),
        &Route::Course("prmt-402".to_string()),
    );

    assert!(body.contains("Previous"));
    assert!(!body.contains("Next &rarr;"));
    assert!(!body.contains("Finished?"));
}

#[test]
fn test_unknown_slug_renders_not_found() {
    let (status, body) = render(
        &SiteSettings::default(),
        &Route::Course("does-not-exist".to_string()),
    );

    assert_eq!(status, PageStatus::NotFound);
    assert!(body.contains("Page Not Found"));
}

#[test]
fn test_base_path_prefixes_links() {
    let settings = SiteSettings::new("Prompt School", "/school/");
    let (_, body) = render(&settings, &Route::Curriculum);

    assert!(body.contains("href=\"/school/style.css\""));
    assert!(body.contains("href=\"/school/curriculum/prmt-101/\""));
    assert!(!body.contains("href=\"/curriculum/"));
}

#[test]
fn test_relative_base_path_prefixes_links() {
    let settings = SiteSettings::new("Prompt School", "school");
    let (_, body) = render(&settings, &Route::Curriculum);

    assert!(body.contains("href=\"/school/style.css\""));
    assert!(body.contains("href=\"/school/curriculum/prmt-101/\""));
}

#[test]
fn test_active_nav_link_on_course_page() {
    let (_, body) = render(
        &SiteSettings::default(),
        &Route::Course("prmt-201".to_string()),
    );

    assert!(body.contains("href=\"/curriculum/\" class=\"active\""));
    assert!(!body.contains("href=\"/\" class=\"active\""));
}
