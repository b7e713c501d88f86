//! The `intro` section.

use super::{RenderContext, chips, open};
use crate::{
    data::{GithubStats, LeetcodeStats, Portfolio},
    layout::{Presence, SectionId},
    utils::html::escape,
};

/// Skills shown in the hero.
const MAX_SKILLS: usize = 8;

pub fn render(portfolio: &Portfolio, flags: &Presence, ctx: &RenderContext) -> String {
    let mut text = format!(
        r#"<p class="hero__headline">{}</p>"#,
        escape(&portfolio.headline)
    );
    if !portfolio.bio.is_empty() {
        text.push_str(&format!(r#"<p class="muted">{}</p>"#, escape(&portfolio.bio)));
    }

    let mut meta = String::new();
    if let Some(status) = portfolio.availability() {
        meta.push_str(&format!(
            r#"<span class="badge"><span class="badge__dot"></span>{}</span>"#,
            escape(status)
        ));
    }
    if !portfolio.location.is_empty() {
        meta.push_str(&format!("<span>{}</span>", escape(&portfolio.location)));
    }
    if !meta.is_empty() {
        text.push_str(&format!(r#"<div class="hero__meta">{meta}</div>"#));
    }

    let mut aside = String::new();
    if flags.has_github_stats
        && let Some(stats) = &portfolio.github_stats
    {
        aside.push_str(&github_summary(stats));
    }
    if flags.has_leetcode_stats
        && let Some(stats) = &portfolio.leetcode_stats
    {
        aside.push_str(&leetcode_summary(stats));
    }
    aside.push_str(&format!(
        r#"<div class="summary"><div class="eyebrow">SKILLS</div><div class="chips">{}</div></div>"#,
        chips(
            portfolio.skills.iter().take(MAX_SKILLS).map(|s| s.name.as_str()),
            "chip"
        )
    ));

    format!(
        r#"{open}<div class="hero__grid"><div><div class="eyebrow">PORTFOLIO / {year}</div><h1 class="hero__name">{name}</h1><div class="hero__text">{text}</div></div><div class="hero__aside">{aside}</div></div></header>
"#,
        open = open("header", SectionId::Intro, "hero"),
        year = ctx.year,
        name = escape(&portfolio.name),
    )
}

fn summary(label: &str, items: &[(u64, &str, &str)]) -> String {
    let items: String = items
        .iter()
        .map(|(value, name, class)| {
            format!(
                r#"<div><div class="summary__value{class}">{value}</div><div class="summary__label">{name}</div></div>"#
            )
        })
        .collect();
    format!(
        r#"<div class="summary"><div class="eyebrow">{label}</div><div class="summary__grid">{items}</div></div>"#
    )
}

fn github_summary(stats: &GithubStats) -> String {
    summary(
        "GITHUB",
        &[
            (stats.total_repos, "Repos", ""),
            (stats.total_stars, "Stars", ""),
            (stats.total_commits, "Commits", ""),
        ],
    )
}

fn leetcode_summary(stats: &LeetcodeStats) -> String {
    summary(
        "LEETCODE",
        &[
            (stats.total_solved, "Solved", ""),
            (stats.easy_solved, "Easy", " easy"),
            (stats.medium_solved, "Medium", " medium"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Skill, TemplateMetadata};
    use crate::layout::resolve;
    use crate::render::tests::ctx;

    fn hero(portfolio: &Portfolio) -> String {
        render(portfolio, &resolve(portfolio).flags, &ctx())
    }

    #[test]
    fn test_label_and_name() {
        let html = hero(&Portfolio {
            name: "Ada".into(),
            ..Portfolio::default()
        });
        assert!(html.starts_with(r#"<header id="intro" data-section="intro""#));
        assert!(html.contains("PORTFOLIO / 2026"));
        assert!(html.contains(r#"<h1 class="hero__name">Ada</h1>"#));
    }

    #[test]
    fn test_optional_text() {
        let html = hero(&Portfolio::default());
        assert!(!html.contains("hero__meta"));
        assert!(!html.contains(r#"<p class="muted">"#));

        let html = hero(&Portfolio {
            bio: "Writes notes.".into(),
            location: "London".into(),
            template_metadata: Some(TemplateMetadata {
                availability_status: Some("Open to work".into()),
            }),
            ..Portfolio::default()
        });
        assert!(html.contains(r#"<p class="muted">Writes notes.</p>"#));
        assert!(html.contains("<span>London</span>"));
        assert!(html.contains(r#"<span class="badge__dot"></span>Open to work"#));
    }

    #[test]
    fn test_first_eight_skills() {
        let skills = (0..10)
            .map(|i| Skill {
                name: format!("skill{i}"),
                ..Skill::default()
            })
            .collect();
        let html = hero(&Portfolio {
            skills,
            ..Portfolio::default()
        });
        assert!(html.contains("skill7"));
        assert!(!html.contains("skill8"));
        assert_eq!(html.matches(r#"class="chip""#).count(), 8);
    }

    #[test]
    fn test_summaries_follow_flags() {
        let html = hero(&Portfolio {
            github_stats: Some(GithubStats {
                total_repos: 0,
                total_stars: 5,
                ..GithubStats::default()
            }),
            leetcode_stats: Some(LeetcodeStats {
                total_solved: 12,
                easy_solved: 8,
                medium_solved: 4,
                ..LeetcodeStats::default()
            }),
            ..Portfolio::default()
        });
        assert!(!html.contains("GITHUB"));
        assert!(html.contains("LEETCODE"));
        assert!(html.contains(r#"<div class="summary__value easy">8</div>"#));
    }
}
