//! Page structure derived from the data file.
//!
//! [`resolve`] decides which optional sections exist and what the in-page
//! navigation lists. The result is recomputed for every render and never
//! stored.
//!
//! | Section      | Rendered when                                   |
//! |--------------|-------------------------------------------------|
//! | `intro`      | always                                          |
//! | `projects`   | at least one project                            |
//! | `experience` | at least one job                                |
//! | `education`  | at least one entry                              |
//! | `stats`      | `githubStats.totalRepos > 0` or `leetcodeStats.totalSolved > 0` |
//! | `connect`    | always                                          |

mod resolve;
mod section;

pub use resolve::{Layout, NavSequence, Presence, resolve};
pub use section::SectionId;
