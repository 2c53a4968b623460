//! View models handed to the page templates
//!
//! Everything a template shows is resolved here through the catalog queries, so
//! templates never look up courses themselves.

use super::content::semester_blurb;
use super::{Route, SiteContext};
use crate::core::models::{Course, Difficulty, Semester, Unit};

/// Entry of the top navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// Public URL
    pub href: String,
    /// Whether the current page belongs to this link
    pub active: bool,
}

const NAV_ITEMS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/manifesto/", "The Manifesto"),
    ("/curriculum/", "Curriculum"),
];

/// Whether a nav target is active for the current page path
///
/// The home link matches only the home page; other links match their whole
/// subtree (course pages highlight "Curriculum").
#[must_use]
pub fn is_active(current: &str, target: &str) -> bool {
    if target == "/" {
        current == "/"
    } else {
        current.starts_with(target)
    }
}

/// Navigation links for a page
#[must_use]
pub fn nav_links(ctx: &SiteContext, current: &Route) -> Vec<NavLink> {
    let current_path = current.path();
    NAV_ITEMS
        .iter()
        .map(|&(path, label)| NavLink {
            label,
            href: ctx.settings.url(path),
            active: is_active(&current_path, path),
        })
        .collect()
}

/// Link to another course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLink<'a> {
    /// Course code
    pub code: &'a str,
    /// Course title
    pub title: &'a str,
    /// Public URL of the course page
    pub href: String,
}

impl<'a> CourseLink<'a> {
    fn new(ctx: &SiteContext, course: &'a Course) -> Self {
        Self {
            code: &course.code,
            title: &course.title,
            href: ctx.url(&Route::Course(course.slug.clone())),
        }
    }
}

/// Course card on the curriculum index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard<'a> {
    /// Course code
    pub code: &'a str,
    /// Course title
    pub title: &'a str,
    /// First sentence of the description
    pub summary: &'a str,
    /// Difficulty label
    pub difficulty: Difficulty,
    /// Public URL of the course page
    pub href: String,
    /// Codes of prerequisites that resolve
    pub requires: Vec<&'a str>,
}

impl CourseCard<'_> {
    /// Comma-separated prerequisite codes
    #[must_use]
    pub fn requires_label(&self) -> String {
        self.requires.join(", ")
    }
}

/// A semester with its courses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterSection<'a> {
    /// Semester record
    pub semester: &'a Semester,
    /// Landing page pitch
    pub blurb: &'static str,
    /// Courses in source order
    pub cards: Vec<CourseCard<'a>>,
}

impl SemesterSection<'_> {
    /// "1 course" / "N courses"
    #[must_use]
    pub fn count_label(&self) -> String {
        match self.cards.len() {
            1 => "1 course".to_string(),
            n => format!("{n} courses"),
        }
    }
}

/// One section per semester, each listing its courses
#[must_use]
pub fn semester_sections<'a>(ctx: &SiteContext<'a>) -> Vec<SemesterSection<'a>> {
    let catalog = ctx.catalog;
    catalog
        .semesters()
        .iter()
        .map(|semester| SemesterSection {
            semester,
            blurb: semester_blurb(semester.number),
            cards: catalog
                .courses_by_semester(semester.number)
                .into_iter()
                .map(|course| CourseCard {
                    code: &course.code,
                    title: &course.title,
                    summary: course.summary(),
                    difficulty: course.difficulty,
                    href: ctx.url(&Route::Course(course.slug.clone())),
                    requires: catalog
                        .prerequisites_of(course)
                        .into_iter()
                        .map(|p| p.code.as_str())
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

/// Everything shown on a course page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail<'a> {
    /// The course
    pub course: &'a Course,
    /// Name of its semester (empty if the semester is missing)
    pub semester_name: &'a str,
    /// Prerequisites that resolve, in listed order
    pub prerequisites: Vec<CourseLink<'a>>,
    /// Units sorted by number
    pub units: Vec<&'a Unit>,
    /// Previous course in source order
    pub previous: Option<CourseLink<'a>>,
    /// Next course in source order
    pub next: Option<CourseLink<'a>>,
}

/// Resolve a course page, or `None` when the slug is unknown
#[must_use]
pub fn course_detail<'a>(ctx: &SiteContext<'a>, slug: &str) -> Option<CourseDetail<'a>> {
    let catalog = ctx.catalog;
    let course = catalog.course_by_slug(slug)?;
    let neighbors = catalog.neighbors(slug)?;

    Some(CourseDetail {
        course,
        semester_name: catalog.semester_name(course).unwrap_or_default(),
        prerequisites: catalog
            .prerequisites_of(course)
            .into_iter()
            .map(|p| CourseLink::new(ctx, p))
            .collect(),
        units: course.units_in_order(),
        previous: neighbors.previous.map(|c| CourseLink::new(ctx, c)),
        next: neighbors.next.map(|c| CourseLink::new(ctx, c)),
    })
}
