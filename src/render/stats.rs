//! The `stats` section: GitHub and LeetCode cards.

use super::{icons, open};
use crate::{
    data::{GithubStats, LeetcodeStats, Portfolio},
    layout::{Presence, SectionId},
    utils::html::escape,
};

pub fn render(portfolio: &Portfolio, flags: &Presence) -> String {
    let mut cards = String::new();
    if flags.has_github_stats
        && let Some(stats) = &portfolio.github_stats
    {
        cards.push_str(&github_card(stats));
    }
    if flags.has_leetcode_stats
        && let Some(stats) = &portfolio.leetcode_stats
    {
        cards.push_str(&leetcode_card(stats));
    }

    format!(
        r#"{open}<div class="section__head"><h2>Coding Stats</h2></div><div class="cards">{cards}</div></section>
"#,
        open = open("section", SectionId::Stats, "section"),
    )
}

fn metric(value: &str, label: &str, class: &str) -> String {
    format!(
        r#"<div><div class="metric__value{class}">{value}</div><div class="metric__label">{label}</div></div>"#
    )
}

fn card(icon: &str, name: &str, body: &str) -> String {
    format!(r#"<div class="card"><div class="card__head">{icon}<span>{name}</span></div>{body}</div>"#)
}

fn github_card(stats: &GithubStats) -> String {
    let mut grid = [
        metric(&stats.total_repos.to_string(), "Repositories", ""),
        metric(&stats.total_stars.to_string(), "Total Stars", ""),
        metric(&stats.total_commits.to_string(), "Commits", ""),
    ]
    .concat();
    if let Some(language) = &stats.primary_language {
        grid.push_str(&metric(
            &escape(language),
            "Primary Language",
            " metric__value--small",
        ));
    }
    card(
        icons::GITHUB,
        "GitHub",
        &format!(r#"<div class="card__grid">{grid}</div>"#),
    )
}

fn leetcode_card(stats: &LeetcodeStats) -> String {
    let mut grid = metric(&stats.total_solved.to_string(), "Problems Solved", "");
    if let Some(ranking) = stats.ranking {
        grid.push_str(&metric(
            &format!("#{}", group_thousands(ranking)),
            "Global Ranking",
            "",
        ));
    }

    let difficulty: String = [
        (stats.easy_solved, "Easy", "easy"),
        (stats.medium_solved, "Medium", "medium"),
        (stats.hard_solved, "Hard", "hard"),
    ]
    .iter()
    .map(|(value, label, class)| {
        format!(
            r#"<div class="difficulty__item {class}"><div class="difficulty__value">{value}</div><div class="metric__label">{label}</div></div>"#
        )
    })
    .collect();

    card(
        icons::LEETCODE,
        "LeetCode",
        &format!(
            r#"<div class="card__grid">{grid}</div><div class="difficulty">{difficulty}</div>"#
        ),
    )
}

/// `1234567` -> `"1,234,567"`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
