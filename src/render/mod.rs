//! HTML rendering of the portfolio page.
//!
//! The renderer paints exactly the sections the [`Layout`] marks visible,
//! in page order, each as an element carrying `id` and `data-section` so
//! the runtime can observe it. The navigation has one button per entry of
//! the navigation sequence.
//!
//! | Module     | Sections                            |
//! |------------|-------------------------------------|
//! | `hero`     | `intro`                             |
//! | `entries`  | `projects`, `experience`, `education` |
//! | `stats`    | `stats`                             |
//! | `connect`  | `connect`, footer                   |

mod connect;
mod entries;
mod hero;
mod icons;
mod stats;

use crate::{
    client::{RootClasses, ThemeToggle},
    config::SiteConfig,
    data::Portfolio,
    embed::page::{CLIENT_JS, ClientVars, STYLE_CSS},
    layout::{Layout, SectionId},
    utils::{
        html::{escape, escape_attr},
        path::url_prefix,
    },
};

/// Everything the page needs besides the data and the layout.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Calendar year from the build clock.
    pub year: u16,
    /// `<title>` override; the portfolio name is used when `None`.
    pub title: Option<String>,
    pub lang: String,
    /// Initial theme.
    pub dark: bool,
    /// Tags placed at the end of `<head>` (stylesheet, runtime script).
    pub head: Vec<String>,
}

impl RenderContext {
    #[cfg(test)]
    pub fn new(year: u16) -> Self {
        Self {
            year,
            title: None,
            lang: "en".into(),
            dark: true,
            head: Vec::new(),
        }
    }

    /// Context for a build of `config`, linking the embedded assets.
    pub fn from_config(config: &SiteConfig, year: u16) -> Self {
        let prefix = url_prefix(&config.build.path_prefix);
        let client_vars = ClientVars::from_config(config);
        Self {
            year,
            title: config.title().map(str::to_string),
            lang: config.site.lang.clone(),
            dark: config.theme.dark,
            head: vec![
                STYLE_CSS.external_tag_with_vars(&(), &prefix),
                CLIENT_JS.external_tag_with_vars(&client_vars, &prefix),
            ],
        }
    }
}

/// Render the full HTML document.
pub fn render_page(portfolio: &Portfolio, layout: &Layout, ctx: &RenderContext) -> String {
    let theme = ThemeToggle::with_initial(RootClasses::default(), ctx.dark);
    let class = theme.target().to_attr();
    let class_attr = if class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{class}""#)
    };

    let title = ctx.title.as_deref().unwrap_or(&portfolio.name);
    let title = if title.trim().is_empty() { "Portfolio" } else { title };

    let description = if portfolio.headline.is_empty() {
        String::new()
    } else {
        format!(
            "\n<meta name=\"description\" content=\"{}\">",
            escape_attr(&portfolio.headline)
        )
    };

    let sections: String = layout
        .visible()
        .map(|section| render_section(section, portfolio, layout, ctx))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}"{class_attr}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>{description}
{head}
</head>
<body>
{nav}
<main class="container">
{sections}{footer}
</main>
<div class="fade-bottom" aria-hidden="true"></div>
</body>
</html>
"#,
        lang = escape_attr(&ctx.lang),
        title = escape(title),
        head = ctx.head.join("\n"),
        nav = render_nav(layout),
        footer = connect::footer(portfolio, ctx, theme.is_dark()),
    )
}

fn render_section(
    section: SectionId,
    portfolio: &Portfolio,
    layout: &Layout,
    ctx: &RenderContext,
) -> String {
    match section {
        SectionId::Intro => hero::render(portfolio, &layout.flags, ctx),
        SectionId::Projects => entries::projects(&portfolio.projects, ctx),
        SectionId::Experience => entries::experience(&portfolio.experience),
        SectionId::Education => entries::education(&portfolio.education),
        SectionId::Stats => stats::render(portfolio, &layout.flags),
        SectionId::Connect => connect::render(portfolio),
    }
}

/// One button per navigation entry.
fn render_nav(layout: &Layout) -> String {
    let buttons: String = layout
        .nav
        .iter()
        .map(|id| {
            format!(
                r#"<button type="button" class="section-nav__dot" data-target="{id}" aria-label="Navigate to {id}"></button>"#
            )
        })
        .collect();
    format!(
        r#"<nav class="section-nav" aria-label="Sections"><div class="section-nav__list">{buttons}</div></nav>"#
    )
}

// ============================================================================
// shared helpers
// ============================================================================

/// Opening tag of a section element.
fn open(tag: &str, section: SectionId, class: &str) -> String {
    format!(r#"<{tag} id="{section}" data-section="{section}" class="{class}">"#)
}

fn chips<'a>(items: impl IntoIterator<Item = &'a str>, class: &str) -> String {
    items
        .into_iter()
        .map(|item| format!(r#"<span class="{class}">{}</span>"#, escape(item)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Education, GithubStats, Job, LeetcodeStats, Project};
    use crate::layout::resolve;

    pub(super) fn ctx() -> RenderContext {
        RenderContext::new(2026)
    }

    fn render(portfolio: &Portfolio) -> String {
        render_page(portfolio, &resolve(portfolio), &ctx())
    }

    fn full() -> Portfolio {
        Portfolio {
            name: "Ada Lovelace".into(),
            headline: "Analyst".into(),
            projects: vec![Project {
                title: "Engine".into(),
                ..Project::default()
            }],
            experience: vec![Job::default()],
            education: vec![Education::default()],
            github_stats: Some(GithubStats {
                total_repos: 3,
                ..GithubStats::default()
            }),
            leetcode_stats: Some(LeetcodeStats {
                total_solved: 7,
                ..LeetcodeStats::default()
            }),
            ..Portfolio::default()
        }
    }

    fn nav_targets(html: &str) -> Vec<&str> {
        html.split(r#"data-target=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_empty_portfolio_renders_fixed_sections_only() {
        let html = render(&Portfolio::default());
        assert!(html.contains(r#"id="intro" data-section="intro""#));
        assert!(html.contains(r#"id="connect" data-section="connect""#));
        for hidden in ["projects", "experience", "education", "stats"] {
            assert!(!html.contains(&format!(r#"id="{hidden}""#)), "{hidden}");
        }
        assert_eq!(nav_targets(&html), ["intro", "connect"]);
    }

    #[test]
    fn test_nav_buttons_match_sequence() {
        let portfolio = full();
        let html = render(&portfolio);
        assert_eq!(nav_targets(&html), resolve(&portfolio).nav.as_strs());
        assert!(html.contains(r#"aria-label="Navigate to stats""#));
    }

    #[test]
    fn test_sections_in_page_order() {
        let html = render(&full());
        let positions: Vec<_> = SectionId::ALL
            .iter()
            .map(|s| html.find(&format!(r#"data-section="{s}""#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_text_is_escaped() {
        let portfolio = Portfolio {
            name: "<script>alert(1)</script>".into(),
            headline: r#"say "hi""#.into(),
            ..Portfolio::default()
        };
        let html = render(&portfolio);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"content="say &quot;hi&quot;""#));
    }

    #[test]
    fn test_title_and_lang() {
        let portfolio = full();
        let html = render(&portfolio);
        assert!(html.contains("<title>Ada Lovelace</title>"));
        assert!(html.contains(r#"<html lang="en" class="dark">"#));

        let mut context = ctx();
        context.title = Some("Ada | Portfolio".into());
        context.lang = "de".into();
        context.dark = false;
        let html = render_page(&portfolio, &resolve(&portfolio), &context);
        assert!(html.contains("<title>Ada | Portfolio</title>"));
        assert!(html.contains(r#"<html lang="de">"#));
    }

    #[test]
    fn test_head_tags_included() {
        let mut context = ctx();
        context.head.push(r#"<link rel="stylesheet" href="/folio.css">"#.into());
        let html = render_page(&Portfolio::default(), &resolve(&Portfolio::default()), &context);
        let head_end = html.find("</head>").unwrap();
        assert!(html[..head_end].contains(r#"href="/folio.css""#));
    }

    #[test]
    fn test_context_from_config_links_assets() {
        let mut config = SiteConfig::default();
        config.build.path_prefix = "portfolio".into();
        config.theme.dark = false;
        let context = RenderContext::from_config(&config, 2026);
        assert!(!context.dark);
        assert_eq!(context.head.len(), 2);
        assert!(context.head[0].contains(r#"href="/portfolio/folio."#));
        assert!(context.head[1].contains(r#"src="/portfolio/folio."#));
    }

    #[test]
    fn test_blank_name_falls_back_in_title() {
        let html = render(&Portfolio::default());
        assert!(html.contains("<title>Portfolio</title>"));
    }
}
