//! HTML site generator
//!
//! Pages are `askama` templates under `templates/`, compiled into the binary and
//! auto-escaped. A small stylesheet is written next to the pages.

use super::content::{self, Stat, Testimonial};
use super::views::{self, CourseDetail, NavLink, SemesterSection};
use super::{PageStatus, RenderedPage, Route, SiteContext, SiteGenerator};
use crate::{debug, info};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Embedded site stylesheet
const STYLESHEET: &str = include_str!("../../assets/style.css");

/// Stylesheet file name at the output root
const STYLESHEET_FILE: &str = "style.css";

/// Shared page chrome: title, nav, and common links
#[derive(Debug, Clone)]
pub struct Layout {
    /// Contents of `<title>`
    pub title: String,
    /// Site title (nav brand)
    pub site_title: String,
    /// Stylesheet URL
    pub stylesheet: String,
    /// Home page URL
    pub home: String,
    /// Manifesto URL
    pub manifesto: String,
    /// Curriculum index URL
    pub curriculum: String,
    /// Footer motto
    pub motto: &'static str,
    /// Navigation bar entries
    pub nav: Vec<NavLink>,
}

impl Layout {
    fn new(ctx: &SiteContext, route: &Route, title: String) -> Self {
        Self {
            title,
            site_title: ctx.settings.title.clone(),
            stylesheet: ctx.settings.url(STYLESHEET_FILE),
            home: ctx.url(&Route::Home),
            manifesto: ctx.url(&Route::Manifesto),
            curriculum: ctx.url(&Route::Curriculum),
            motto: content::MOTTO,
            nav: views::nav_links(ctx, route),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage<'a> {
    layout: Layout,
    tagline: &'static str,
    sections: Vec<SemesterSection<'a>>,
    stats: Vec<Stat>,
    testimonials: &'static [Testimonial],
    course_count: usize,
    semester_count: usize,
}

#[derive(Template)]
#[template(path = "manifesto.html")]
struct ManifestoPage {
    layout: Layout,
    course_count: usize,
}

#[derive(Template)]
#[template(path = "curriculum.html")]
struct CurriculumPage<'a> {
    layout: Layout,
    sections: Vec<SemesterSection<'a>>,
    course_count: usize,
    semester_count: usize,
}

#[derive(Template)]
#[template(path = "course.html")]
struct CoursePage<'a> {
    layout: Layout,
    detail: CourseDetail<'a>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage {
    layout: Layout,
}

/// HTML site generator
pub struct HtmlSite;

impl HtmlSite {
    /// Create a new HTML site generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_home(ctx: &SiteContext) -> askama::Result<String> {
        let catalog = ctx.catalog;
        let title = format!("{} | {}", ctx.settings.title, content::TAGLINE);
        HomePage {
            layout: Layout::new(ctx, &Route::Home, title),
            tagline: content::TAGLINE,
            sections: views::semester_sections(ctx),
            stats: content::stats(catalog.len()),
            testimonials: &content::TESTIMONIALS,
            course_count: catalog.len(),
            semester_count: catalog.semesters().len(),
        }
        .render()
    }

    fn render_manifesto(ctx: &SiteContext) -> askama::Result<String> {
        ManifestoPage {
            layout: Layout::new(ctx, &Route::Manifesto, ctx.page_title("The Manifesto")),
            course_count: ctx.catalog.len(),
        }
        .render()
    }

    fn render_curriculum(ctx: &SiteContext) -> askama::Result<String> {
        CurriculumPage {
            layout: Layout::new(ctx, &Route::Curriculum, ctx.page_title("Curriculum")),
            sections: views::semester_sections(ctx),
            course_count: ctx.catalog.len(),
            semester_count: ctx.catalog.semesters().len(),
        }
        .render()
    }

    fn render_not_found(ctx: &SiteContext, route: &Route) -> askama::Result<String> {
        NotFoundPage {
            layout: Layout::new(ctx, route, ctx.page_title("Page Not Found")),
        }
        .render()
    }

    /// Render a course page, or `None` when the slug is unknown
    fn render_course(ctx: &SiteContext, slug: &str) -> askama::Result<Option<String>> {
        let Some(detail) = views::course_detail(ctx, slug) else {
            return Ok(None);
        };
        let route = Route::Course(slug.to_string());
        let title = ctx.page_title(&format!("{}: {}", detail.course.code, detail.course.title));
        CoursePage {
            layout: Layout::new(ctx, &route, title),
            detail,
        }
        .render()
        .map(Some)
    }

    fn write_page(out_dir: &Path, relative: &Path, body: &str) -> Result<PathBuf, Box<dyn Error>> {
        let path = out_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, body)?;
        Ok(path)
    }
}

impl Default for HtmlSite {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteGenerator for HtmlSite {
    fn render(&self, ctx: &SiteContext, route: &Route) -> Result<RenderedPage, Box<dyn Error>> {
        let found = |body| RenderedPage {
            route: route.clone(),
            status: PageStatus::Found,
            body,
        };

        let page = match route {
            Route::Home => found(Self::render_home(ctx)?),
            Route::Manifesto => found(Self::render_manifesto(ctx)?),
            Route::Curriculum => found(Self::render_curriculum(ctx)?),
            Route::Course(slug) => match Self::render_course(ctx, slug)? {
                Some(body) => found(body),
                None => {
                    debug!("No course with slug '{slug}', rendering 404");
                    RenderedPage {
                        route: route.clone(),
                        status: PageStatus::NotFound,
                        body: Self::render_not_found(ctx, route)?,
                    }
                }
            },
            Route::NotFound => RenderedPage {
                route: route.clone(),
                status: PageStatus::NotFound,
                body: Self::render_not_found(ctx, route)?,
            },
        };

        Ok(page)
    }

    fn generate(&self, ctx: &SiteContext, out_dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        fs::create_dir_all(out_dir)?;

        let mut written = Vec::new();
        for route in Route::all(ctx.catalog) {
            let page = self.render(ctx, &route)?;
            let path = Self::write_page(out_dir, &route.output_file(), &page.body)?;
            debug!("Rendered {} -> {}", route.path(), path.display());
            written.push(path);
        }

        written.push(Self::write_page(out_dir, Path::new(STYLESHEET_FILE), STYLESHEET)?);

        info!("Site written to {} ({} files)", out_dir.display(), written.len());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::site::SiteSettings;

    fn render(route: &Route) -> RenderedPage {
        let settings = SiteSettings::default();
        let ctx = SiteContext::new(Catalog::builtin(), &settings);
        HtmlSite::new().render(&ctx, route).expect("render should succeed")
    }

    #[test]
    fn test_home_lists_semesters() {
        let page = render(&Route::Home);
        assert_eq!(page.status, PageStatus::Found);
        assert!(page.body.contains("Intermediate Techniques"));
        assert!(page.body.contains("Courses here"));
    }

    #[test]
    fn test_unknown_course_renders_not_found() {
        let page = render(&Route::Course("does-not-exist".to_string()));
        assert_eq!(page.status, PageStatus::NotFound);
        assert!(page.body.contains("Page Not Found"));
    }

    #[test]
    fn test_course_page_has_navigation() {
        let page = render(&Route::Course("prmt-102".to_string()));
        assert_eq!(page.status, PageStatus::Found);
        assert!(page.body.contains("Understanding Language Models"));
        assert!(page.body.contains("PRMT-101"));
        assert!(page.body.contains("PRMT-103"));
    }
}
