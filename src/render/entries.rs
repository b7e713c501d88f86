//! List sections: `projects`, `experience`, `education`.

use super::{RenderContext, chips, open};
use crate::{
    data::{Education, Job, Project},
    layout::SectionId,
    utils::{
        html::{escape, escape_attr, is_safe_href},
        plural::plural_count,
    },
};

/// Tags shown per project.
const MAX_TAGS: usize = 4;

fn section(id: SectionId, class: &str, heading: &str, count: Option<String>, body: String) -> String {
    let count = count
        .map(|c| format!(r#"<span class="section__count">{c}</span>"#))
        .unwrap_or_default();
    format!(
        r#"{open}<div class="section__head"><h2>{heading}</h2>{count}</div><div>{body}</div></section>
"#,
        open = open("section", id, class),
    )
}

pub fn projects(projects: &[Project], ctx: &RenderContext) -> String {
    let body: String = projects.iter().map(|p| project(p, ctx.year)).collect();
    section(
        SectionId::Projects,
        "section section--tall",
        "Projects",
        Some(plural_count(projects.len(), "project")),
        body,
    )
}

fn project(project: &Project, current_year: u16) -> String {
    let year = project
        .year
        .as_deref()
        .map_or_else(|| current_year.to_string(), |y| escape(y).into_owned());

    let link = match project.url.as_deref() {
        Some(url) if is_safe_href(url) => format!(
            r#"<a class="entry__link" href="{}" target="_blank" rel="noopener noreferrer">View on GitHub →</a>"#,
            escape_attr(url)
        ),
        _ => String::new(),
    };

    format!(
        r#"<article class="entry"><div class="entry__when">{year}</div><div class="entry__body"><div><h3>{title}</h3>{link}</div><p>{description}</p></div><div class="entry__tags">{tags}</div></article>"#,
        title = escape(&project.title),
        description = escape(&project.description),
        tags = chips(project.tags.iter().take(MAX_TAGS).map(String::as_str), "tag"),
    )
}

pub fn experience(jobs: &[Job]) -> String {
    let body: String = jobs
        .iter()
        .map(|job| {
            format!(
                r#"<article class="entry entry--job"><div class="entry__when">{start}</div><div class="entry__body"><div><h3>{title}</h3><div class="muted">{company}</div></div><p>{description}</p></div><div class="entry__tags">{tech}</div></article>"#,
                start = escape(&job.start_date),
                title = escape(&job.title),
                company = escape(&job.company),
                description = escape(&job.description),
                tech = chips(job.technologies.iter().map(String::as_str), "tag"),
            )
        })
        .collect();
    section(SectionId::Experience, "section section--tall", "Experience", None, body)
}

pub fn education(education: &[Education]) -> String {
    let body: String = education
        .iter()
        .map(|edu| {
            let field = edu
                .field_of_study
                .as_deref()
                .map(|f| format!(r#"<div class="muted">{}</div>"#, escape(f)))
                .unwrap_or_default();
            format!(
                r#"<article class="entry entry--education"><div class="entry__when">{start} — {end}</div><div class="entry__body"><h3>{degree}</h3><div class="muted">{institution}</div>{field}</div></article>"#,
                start = escape(&edu.start_date),
                end = escape(edu.end_date.as_deref().unwrap_or("Present")),
                degree = escape(&edu.degree),
                institution = escape(&edu.institution),
            )
        })
        .collect();
    section(SectionId::Education, "section", "Education", None, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::ctx;

    fn tags(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tag{i}")).collect()
    }

    #[test]
    fn test_project_count_label() {
        let one = projects(&[Project::default()], &ctx());
        assert!(one.contains(">1 project<"));
        let two = projects(&[Project::default(), Project::default()], &ctx());
        assert!(two.contains(">2 projects<"));
        assert!(two.starts_with(r#"<section id="projects" data-section="projects""#));
    }

    #[test]
    fn test_project_year_falls_back_to_current() {
        let html = project(&Project::default(), 2026);
        assert!(html.contains(r#"<div class="entry__when">2026</div>"#));

        let html = project(
            &Project {
                year: Some("2019".into()),
                ..Project::default()
            },
            2026,
        );
        assert!(html.contains(r#"<div class="entry__when">2019</div>"#));
    }

    #[test]
    fn test_project_link_opens_new_tab() {
        let html = project(
            &Project {
                url: Some("https://github.com/ada/engine".into()),
                ..Project::default()
            },
            2026,
        );
        assert!(html.contains(r#"href="https://github.com/ada/engine""#));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains("View on GitHub →"));

        assert!(!project(&Project::default(), 2026).contains("<a "));
    }

    #[test]
    fn test_unsafe_project_link_is_dropped() {
        let html = project(
            &Project {
                url: Some("javascript:alert(1)".into()),
                ..Project::default()
            },
            2026,
        );
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_first_four_tags() {
        let html = project(
            &Project {
                tags: tags(6),
                ..Project::default()
            },
            2026,
        );
        assert_eq!(html.matches(r#"class="tag""#).count(), 4);
        assert!(!html.contains("tag4"));
    }

    #[test]
    fn test_experience_entry() {
        let html = experience(&[Job {
            title: "Engineer".into(),
            company: "Analytical Co".into(),
            start_date: "2021".into(),
            description: "Built & shipped.".into(),
            technologies: tags(5),
        }]);
        assert!(html.contains(r#"<div class="entry__when">2021</div>"#));
        assert!(html.contains("<h3>Engineer</h3>"));
        assert!(html.contains("Analytical Co"));
        assert!(html.contains("Built &amp; shipped."));
        // Technologies are not truncated.
        assert_eq!(html.matches(r#"class="tag""#).count(), 5);
    }

    #[test]
    fn test_education_dates_and_field() {
        let html = education(&[
            Education {
                degree: "B.Sc.".into(),
                institution: "UCL".into(),
                start_date: "2015".into(),
                end_date: Some("2019".into()),
                field_of_study: Some("Mathematics".into()),
            },
            Education {
                start_date: "2020".into(),
                ..Education::default()
            },
        ]);
        assert!(html.contains("2015 — 2019"));
        assert!(html.contains("2020 — Present"));
        assert!(html.contains(r#"<div class="muted">Mathematics</div>"#));
        assert_eq!(html.matches(r#"<div class="muted">"#).count(), 3);
    }
}
