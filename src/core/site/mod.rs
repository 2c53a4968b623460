//! Static site rendering
//!
//! Turns a [`Catalog`] into the Prompt School website: landing page, manifesto,
//! curriculum index, one page per course, and a 404 page. Rendering is a pure
//! function of the catalog and [`SiteSettings`]; [`SiteGenerator::generate`]
//! writes every page under an output directory.

pub mod content;
pub mod html;
pub mod views;

pub use html::HtmlSite;

use crate::config::Config;
use crate::core::catalog::Catalog;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Site-wide presentation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Site title used in page titles and the nav brand
    pub title: String,
    /// URL prefix the site is served under (e.g. "/" or "/school/")
    pub base_path: String,
}

impl SiteSettings {
    /// Create settings from a title and base path
    ///
    /// The base path is normalized with [`normalize_base_path`].
    #[must_use]
    pub fn new(title: &str, base_path: &str) -> Self {
        Self {
            title: title.to_string(),
            base_path: normalize_base_path(base_path),
        }
    }

    /// Settings from the `[site]` section of the configuration
    ///
    /// Empty values fall back to the defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            title: if config.site.title.is_empty() {
                defaults.title
            } else {
                config.site.title.clone()
            },
            base_path: if config.site.base_path.is_empty() {
                defaults.base_path
            } else {
                normalize_base_path(&config.site.base_path)
            },
        }
    }

    /// Public URL for a site path such as `/curriculum/`
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

/// Reduce a configured base path to an absolute URL path
///
/// Characters outside ASCII alphanumerics and `-._~/` are dropped, and a
/// leading `/` is added when missing, so `"school"` becomes `"/school"`.
#[must_use]
pub fn normalize_base_path(base_path: &str) -> String {
    let kept: String = base_path
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '/'))
        .collect();
    if kept.starts_with('/') {
        kept
    } else {
        format!("/{kept}")
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::new("Prompt School", "/")
    }
}

/// A page of the site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page
    Home,
    /// Manifesto page
    Manifesto,
    /// Curriculum index
    Curriculum,
    /// Course detail page, addressed by slug
    Course(String),
    /// Page shown for unknown addresses
    NotFound,
}

impl Route {
    /// Every route of the site: fixed pages, one per course in source order, then 404
    #[must_use]
    pub fn all(catalog: &Catalog) -> Vec<Self> {
        let mut routes = vec![Self::Home, Self::Manifesto, Self::Curriculum];
        routes.extend(
            catalog
                .courses()
                .iter()
                .map(|course| Self::Course(course.slug.clone())),
        );
        routes.push(Self::NotFound);
        routes
    }

    /// Site path (before the base path is applied)
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Manifesto => "/manifesto/".to_string(),
            Self::Curriculum => "/curriculum/".to_string(),
            Self::Course(slug) => format!("/curriculum/{slug}/"),
            Self::NotFound => "/404.html".to_string(),
        }
    }

    /// File the page is written to, relative to the output directory
    #[must_use]
    pub fn output_file(&self) -> PathBuf {
        match self {
            Self::Home => PathBuf::from("index.html"),
            Self::Manifesto => Path::new("manifesto").join("index.html"),
            Self::Curriculum => Path::new("curriculum").join("index.html"),
            Self::Course(slug) => Path::new("curriculum").join(slug).join("index.html"),
            Self::NotFound => PathBuf::from("404.html"),
        }
    }
}

/// Whether a rendered page is the one that was asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// The route resolved
    Found,
    /// The route did not resolve; the body is the 404 page
    NotFound,
}

/// Output of rendering one route
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Route that was requested
    pub route: Route,
    /// Resolution status
    pub status: PageStatus,
    /// Page body
    pub body: String,
}

/// Data context for site rendering
#[derive(Debug, Clone, Copy)]
pub struct SiteContext<'a> {
    /// Catalog being rendered
    pub catalog: &'a Catalog,
    /// Presentation settings
    pub settings: &'a SiteSettings,
}

impl<'a> SiteContext<'a> {
    /// Create a new site context
    #[must_use]
    pub const fn new(catalog: &'a Catalog, settings: &'a SiteSettings) -> Self {
        Self { catalog, settings }
    }

    /// Public URL of a route
    #[must_use]
    pub fn url(&self, route: &Route) -> String {
        self.settings.url(&route.path())
    }

    /// Page title, e.g. "PRMT-101: Fundamentals of Prompting | Prompt School"
    #[must_use]
    pub fn page_title(&self, page: &str) -> String {
        format!("{page} | {}", self.settings.title)
    }
}

/// Trait for site generators
pub trait SiteGenerator {
    /// Render a single route
    ///
    /// A course route whose slug is unknown renders the 404 page with
    /// [`PageStatus::NotFound`].
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &SiteContext, route: &Route) -> Result<RenderedPage, Box<dyn Error>>;

    /// Render every route and write the site under `out_dir`
    ///
    /// Returns the written files in route order.
    ///
    /// # Errors
    /// Returns an error if rendering fails or files cannot be written
    fn generate(&self, ctx: &SiteContext, out_dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>>;
}
