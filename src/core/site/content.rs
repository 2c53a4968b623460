//! Fixed marketing copy for the landing page

/// Headline under the site title
pub const TAGLINE: &str = "You don't need a degree. You need a prompt.";

/// Footer motto
pub const MOTTO: &str = "No tuition. No admissions. No campus. Just the curriculum that actually matters.";

/// A student quote shown on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    /// Student name
    pub name: &'static str,
    /// Role line under the name
    pub role: &'static str,
    /// Quote text
    pub quote: &'static str,
}

/// Landing page testimonials
pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Prompt Engineer at a Series B startup",
        quote: "I dropped out of my CS master's program after Semester 1. I was learning more here in a week than I learned in a semester.",
    },
    Testimonial {
        name: "Marcus Williams",
        role: "Freelance AI Consultant",
        quote: "I went from writing 'hey can you help me with this' to architecting multi-step agent workflows. My clients think I'm a wizard. I just took the courses.",
    },
    Testimonial {
        name: "Priya Patel",
        role: "Product Manager, Fortune 500",
        quote: "Semester 3 changed how I think about building products. I now spec features as prompt chains. My engineering team actually likes my PRDs now.",
    },
    Testimonial {
        name: "Jake Morrison",
        role: "Career Switcher, ex-Barista",
        quote: "Six months ago I was pulling espresso shots. Now I'm pulling six figures building AI automations for small businesses. No degree required.",
    },
];

/// Short pitch for a semester card; empty for semesters without copy
#[must_use]
pub const fn semester_blurb(number: u8) -> &'static str {
    match number {
        1 => "Start here. Learn what a prompt actually is, how LLMs think, and the fundamental patterns that separate amateurs from professionals.",
        2 => "Go deeper. Multi-turn reasoning, persona engineering, chain-of-thought prompting, and techniques that unlock real problem-solving.",
        3 => "Build real things. AI-assisted coding, content pipelines, retrieval-augmented generation, and multi-agent orchestration.",
        4 => "Put it all together. A capstone project, ethics deep-dive, and the portfolio that proves you know what you're doing.",
        _ => "",
    }
}

/// A figure in the landing page stats strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    /// Formatted value (e.g. "$37,574")
    pub value: String,
    /// Caption
    pub label: &'static str,
}

/// Stats strip; the course count comes from the catalog
#[must_use]
pub fn stats(course_count: usize) -> Vec<Stat> {
    vec![
        Stat {
            value: "$37,574".to_string(),
            label: "Avg. student debt",
        },
        Stat {
            value: "$0".to_string(),
            label: "Prompt School tuition",
        },
        Stat {
            value: "4".to_string(),
            label: "Years for a degree",
        },
        Stat {
            value: course_count.to_string(),
            label: "Courses here",
        },
    ]
}
