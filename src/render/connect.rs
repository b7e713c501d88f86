//! The `connect` section and the page footer.

use super::{RenderContext, icons, open};
use crate::{
    data::{Portfolio, SocialLink},
    layout::SectionId,
    utils::html::{escape, escape_attr, is_safe_href},
};

const INVITATION: &str = "Always interested in new opportunities, collaborations, and conversations about technology and design.";

pub fn render(portfolio: &Portfolio) -> String {
    let email = portfolio
        .email()
        .map(|email| {
            format!(
                r#"<a class="connect__email" href="mailto:{href}"><span>{text}</span>{arrow}</a>"#,
                href = escape_attr(email),
                text = escape(email),
                arrow = icons::ARROW_RIGHT,
            )
        })
        .unwrap_or_default();

    let links: String = portfolio.social_links.iter().map(link_card).collect();

    format!(
        r#"{open}<div class="connect"><div class="connect__intro"><h2>Let's Connect</h2><p class="connect__lead">{INVITATION}</p>{email}</div><div class="connect__intro"><div class="eyebrow">ELSEWHERE</div><div class="links">{links}</div></div></div></section>
"#,
        open = open("section", SectionId::Connect, "section"),
    )
}

fn link_card(link: &SocialLink) -> String {
    if !is_safe_href(&link.url) {
        return String::new();
    }
    format!(
        r#"<a class="link-card" href="{href}" target="_blank" rel="noopener noreferrer"><span class="link-card__platform">{platform}</span><span class="link-card__url">{url}</span></a>"#,
        href = escape_attr(&link.url),
        platform = escape(&link.platform),
        url = escape(&link.url),
    )
}

/// Copyright line and theme toggle.
pub fn footer(portfolio: &Portfolio, ctx: &RenderContext, dark: bool) -> String {
    format!(
        r#"<footer class="footer"><div><div>© {year} {name}. All rights reserved.</div><div class="footer__credit">Built with folio</div></div><button type="button" class="theme-toggle" data-theme-toggle aria-label="Toggle theme" aria-pressed="{dark}">{sun}{moon}</button></footer>"#,
        year = ctx.year,
        name = escape(&portfolio.name),
        sun = icons::SUN,
        moon = icons::MOON,
    )
}
