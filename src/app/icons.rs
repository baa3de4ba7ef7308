use leptos::prelude::*;

use crate::content::{Glyph, SOCIAL_LINKS};

#[component]
pub fn Icon(glyph: Glyph, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", glyph.class()) aria-hidden="true"></i> }
}

/// GitHub / LinkedIn / mail links, shared by the hero and the footer.
#[component]
pub fn SocialLinks(link_class: &'static str, icon_class: &'static str) -> impl IntoView {
    SOCIAL_LINKS
        .iter()
        .map(|link| {
            view! {
                <a href=link.href class=link_class aria-label=link.label>
                    <Icon glyph=link.icon class=icon_class />
                </a>
            }
        })
        .collect_view()
}
