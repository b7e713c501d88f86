//! Section visibility and navigation assembly.

use super::SectionId;
use crate::data::Portfolio;
use serde::Serialize;

/// Which optional sections have enough data to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presence {
    pub has_experience: bool,
    pub has_projects: bool,
    pub has_education: bool,
    pub has_github_stats: bool,
    pub has_leetcode_stats: bool,
}

impl Presence {
    /// Derive the flags from data presence alone.
    pub fn of(portfolio: &Portfolio) -> Self {
        Self {
            has_experience: !portfolio.experience.is_empty(),
            has_projects: !portfolio.projects.is_empty(),
            has_education: !portfolio.education.is_empty(),
            // A record with a zero count counts as absent.
            has_github_stats: portfolio
                .github_stats
                .as_ref()
                .is_some_and(|s| s.total_repos > 0),
            has_leetcode_stats: portfolio
                .leetcode_stats
                .as_ref()
                .is_some_and(|s| s.total_solved > 0),
        }
    }

    pub const fn has_stats(&self) -> bool {
        self.has_github_stats || self.has_leetcode_stats
    }

    /// Whether `section` renders at all.
    pub const fn is_visible(&self, section: SectionId) -> bool {
        match section {
            SectionId::Projects => self.has_projects,
            SectionId::Experience => self.has_experience,
            SectionId::Education => self.has_education,
            SectionId::Stats => self.has_stats(),
            SectionId::Intro | SectionId::Connect => true,
        }
    }
}

/// Ordered, duplicate-free list of navigable sections.
///
/// Always starts with `intro` and ends with `connect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavSequence(Vec<SectionId>);

impl NavSequence {
    fn assemble(flags: &Presence) -> Self {
        let mut sections = vec![SectionId::Intro];
        if flags.has_projects {
            sections.push(SectionId::Projects);
        }
        if flags.has_experience {
            sections.push(SectionId::Experience);
        }
        if flags.has_education {
            sections.push(SectionId::Education);
        }
        if flags.has_stats() {
            sections.push(SectionId::Stats);
        }
        sections.push(SectionId::Connect);
        Self(sections)
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.0.iter().copied()
    }

    pub fn as_strs(&self) -> Vec<&'static str> {
        self.iter().map(SectionId::as_str).collect()
    }
}

/// Everything the renderer and the client runtime need to know about
/// page structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub flags: Presence,
    pub nav: NavSequence,
}

impl Layout {
    pub const fn is_visible(&self, section: SectionId) -> bool {
        self.flags.is_visible(section)
    }

    /// Sections that render, in page order.
    pub fn visible(&self) -> impl Iterator<Item = SectionId> + '_ {
        SectionId::ALL.into_iter().filter(|s| self.is_visible(*s))
    }
}

/// Derive page structure from data presence.
///
/// Pure: no clock, no I/O, the input is only read.
pub fn resolve(portfolio: &Portfolio) -> Layout {
    let flags = Presence::of(portfolio);
    let nav = NavSequence::assemble(&flags);
    Layout { flags, nav }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Education, GithubStats, Job, LeetcodeStats, Project};

    fn project(title: &str) -> Project {
        Project {
            title: title.into(),
            ..Project::default()
        }
    }

    fn full() -> Portfolio {
        Portfolio {
            projects: vec![project("a")],
            experience: vec![Job::default()],
            education: vec![Education::default()],
            github_stats: Some(GithubStats {
                total_repos: 4,
                ..GithubStats::default()
            }),
            leetcode_stats: Some(LeetcodeStats {
                total_solved: 10,
                ..LeetcodeStats::default()
            }),
            ..Portfolio::default()
        }
    }

    #[test]
    fn test_empty_portfolio_has_only_fixed_sections() {
        let layout = resolve(&Portfolio::default());
        assert_eq!(layout.nav.as_strs(), ["intro", "connect"]);
        assert_eq!(layout.flags, Presence::default());
    }

    #[test]
    fn test_zero_totals_hide_stats() {
        let portfolio = Portfolio {
            github_stats: Some(GithubStats {
                total_repos: 0,
                total_stars: 99,
                ..GithubStats::default()
            }),
            leetcode_stats: Some(LeetcodeStats {
                total_solved: 0,
                easy_solved: 3,
                ..LeetcodeStats::default()
            }),
            ..Portfolio::default()
        };
        let layout = resolve(&portfolio);
        assert!(!layout.flags.has_github_stats);
        assert!(!layout.flags.has_leetcode_stats);
        assert_eq!(layout.nav.as_strs(), ["intro", "connect"]);
    }

    #[test]
    fn test_everything_present() {
        let layout = resolve(&full());
        assert_eq!(
            layout.nav.as_strs(),
            ["intro", "projects", "experience", "education", "stats", "connect"]
        );
        assert_eq!(layout.visible().count(), 6);
    }

    #[test]
    fn test_github_flag_follows_repo_count() {
        let mut portfolio = Portfolio::default();
        assert!(!Presence::of(&portfolio).has_github_stats);

        portfolio.github_stats = Some(GithubStats::default());
        assert!(!Presence::of(&portfolio).has_github_stats);

        portfolio.github_stats = Some(GithubStats {
            total_repos: 1,
            ..GithubStats::default()
        });
        assert!(Presence::of(&portfolio).has_github_stats);
    }

    #[test]
    fn test_fractional_repo_count_counts_as_present() {
        let portfolio = Portfolio::from_json(r#"{ "githubStats": { "totalRepos": 0.5 } }"#).unwrap();
        assert!(resolve(&portfolio).flags.has_github_stats);
    }

    #[test]
    fn test_absent_projects_field() {
        let portfolio = Portfolio::from_json(r#"{ "name": "x" }"#).unwrap();
        assert!(!resolve(&portfolio).flags.has_projects);
    }

    #[test]
    fn test_projects_and_education_without_experience() {
        let portfolio = Portfolio {
            experience: vec![],
            projects: vec![project("a"), project("b")],
            education: vec![Education::default()],
            ..Portfolio::default()
        };
        assert_eq!(
            resolve(&portfolio).nav.as_strs(),
            ["intro", "projects", "education", "connect"]
        );
    }

    #[test]
    fn test_leetcode_alone_adds_stats_before_connect() {
        let portfolio =
            Portfolio::from_json(r#"{ "leetcodeStats": { "totalSolved": 5 } }"#).unwrap();
        let nav = resolve(&portfolio).nav.as_strs();
        assert_eq!(nav.iter().filter(|s| **s == "stats").count(), 1);
        assert_eq!(nav, ["intro", "stats", "connect"]);
    }

    #[test]
    fn test_nav_invariants_for_every_combination() {
        for mask in 0u8..32 {
            let bit = |n: u8| mask & (1 << n) != 0;
            let mut portfolio = Portfolio::default();
            if bit(0) {
                portfolio.projects.push(project("p"));
            }
            if bit(1) {
                portfolio.experience.push(Job::default());
            }
            if bit(2) {
                portfolio.education.push(Education::default());
            }
            if bit(3) {
                portfolio.github_stats = Some(GithubStats {
                    total_repos: 1,
                    ..GithubStats::default()
                });
            }
            if bit(4) {
                portfolio.leetcode_stats = Some(LeetcodeStats {
                    total_solved: 1,
                    ..LeetcodeStats::default()
                });
            }

            let layout = resolve(&portfolio);
            let nav: Vec<_> = layout.nav.iter().collect();
            assert_eq!(nav.first(), Some(&SectionId::Intro));
            assert_eq!(nav.last(), Some(&SectionId::Connect));
            // Strictly increasing page order implies no duplicates.
            assert!(nav.windows(2).all(|w| w[0] < w[1]), "mask {mask:05b}: {nav:?}");
            // Navigation lists exactly the visible sections.
            assert!(layout.visible().eq(layout.nav.iter()));
        }
    }

    #[test]
    fn test_resolve_is_deterministic_and_read_only() {
        let portfolio = full();
        let before = portfolio.clone();
        assert_eq!(resolve(&portfolio), resolve(&portfolio));
        assert_eq!(portfolio, before);
    }

    #[test]
    fn test_layout_serializes_for_query() {
        let json = serde_json::to_value(resolve(&Portfolio::default())).unwrap();
        assert_eq!(json["nav"], serde_json::json!(["intro", "connect"]));
        assert_eq!(json["flags"]["hasProjects"], serde_json::json!(false));
    }
}
