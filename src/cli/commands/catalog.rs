//! Catalog query commands: `semesters`, `courses` and `course`

use prompt_school::config::Config;
use prompt_school::core::catalog::Catalog;
use prompt_school::core::models::Course;
use prompt_school::core::text::first_sentence;

/// List every semester with its course count
///
/// # Errors
/// Returns a user-facing message if the catalog cannot be loaded
pub fn run_semesters(config: &Config) -> Result<(), String> {
    let catalog = super::load(config)?;

    for semester in catalog.semesters() {
        println!(
            "{:<36} {:<13} {} courses",
            semester.label(),
            semester.difficulty.as_str(),
            catalog.courses_by_semester(semester.number).len()
        );
    }
    Ok(())
}

/// List courses in source order, optionally filtered to one semester
///
/// An unknown semester is not an error; it lists nothing.
///
/// # Errors
/// Returns a user-facing message if the catalog cannot be loaded
pub fn run_courses(semester: Option<u8>, config: &Config) -> Result<(), String> {
    let catalog = super::load(config)?;

    let courses: Vec<&Course> = match semester {
        Some(number) => catalog.courses_by_semester(number),
        None => catalog.courses().iter().collect(),
    };

    if courses.is_empty() {
        println!("No courses found");
        return Ok(());
    }

    for course in courses {
        println!(
            "{:<10} {:<14} S{} {:<13} {}",
            course.code,
            course.slug,
            course.semester,
            course.difficulty.as_str(),
            course.title
        );
        println!("{:<10} {}", "", course.summary());
    }
    Ok(())
}

/// Show one course by slug
///
/// # Errors
/// Returns a not-found message for an unknown slug, or a load error
pub fn run_course(slug: &str, config: &Config) -> Result<(), String> {
    let catalog = super::load(config)?;
    let course = catalog
        .course_by_slug(slug)
        .ok_or_else(|| format!("✗ Course not found: '{slug}'"))?;

    print_course(&catalog, course);
    Ok(())
}

fn codes(courses: &[&Course]) -> String {
    if courses.is_empty() {
        "none".to_string()
    } else {
        courses
            .iter()
            .map(|c| c.code.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn print_course(catalog: &Catalog, course: &Course) {
    println!("\n=== {}: {} ===\n", course.code, course.title);
    println!(
        "Semester {}: {}",
        course.semester,
        catalog.semester_name(course).unwrap_or("?")
    );
    println!("Difficulty: {}", course.difficulty);
    println!("Prerequisites: {}", codes(&catalog.prerequisites_of(course)));
    println!("Required by: {}", codes(&catalog.required_by(&course.slug)));

    if !course.description.is_empty() {
        println!("\n{}", course.description);
    }

    println!("\nUnits:");
    for unit in course.units_in_order() {
        println!("  {}. {}", unit.number, unit.title);
        for concept in &unit.concepts {
            println!("     - {concept}");
        }
        for example in &unit.example_prompts {
            let label = if example.context.is_empty() {
                "Example"
            } else {
                example.context.as_str()
            };
            println!("     > {label}: {}", first_sentence(example.prompt.trim()));
        }
        if !unit.assignment.is_empty() {
            println!("     Assignment: {}", unit.assignment);
        }
    }

    if !course.recommended_reading.is_empty() {
        println!("\nRecommended reading:");
        for link in &course.recommended_reading {
            println!("  {} <{}>", link.title, link.url);
        }
    }

    if !course.office_hours.is_empty() {
        println!("\nOffice hours: {}", course.office_hours);
    }

    if let Some(neighbors) = catalog.neighbors(&course.slug) {
        println!();
        if let Some(previous) = neighbors.previous {
            println!("Previous: {} ({})", previous.code, previous.slug);
        }
        if let Some(next) = neighbors.next {
            println!("Next: {} ({})", next.code, next.slug);
        }
    }
}
