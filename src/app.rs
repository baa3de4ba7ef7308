mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;

use crate::content::{OWNER, TAGLINE};

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <HeadLinks />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Stylesheets in the document head. Everything local is served from
/// the cargo-leptos site root.
#[component]
fn HeadLinks() -> impl IntoView {
    view! {
        <link rel="stylesheet" href="https://unpkg.com/lucide-static@0.469.0/font/lucide.css" />
        <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{OWNER} - {TAGLINE}") />
        <Meta name="description" content=format!("Portfolio of {OWNER}, {TAGLINE}.") />
        <div class="min-h-screen bg-gray-50">
            <Hero />
            <About />
            <Projects />
            <Contact />
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::contact::{ContactTiming, SUCCESS_NOTICE};
    use leptos::tachys::view::RenderHtml;

    fn render<V: RenderHtml>(view: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| view().to_html())
    }

    #[test]
    fn test_static_sections_render_identically() {
        let first = render(|| view! { <Hero /> <About /> <Projects /> <Footer /> });
        let second = render(|| view! { <Hero /> <About /> <Projects /> <Footer /> });
        assert_eq!(first, second);
    }

    #[test]
    fn test_head_links_only_reference_built_assets() {
        let html = render(|| view! { <HeadLinks /> });
        assert!(html.contains("/pkg/portfolio-site.css"));
        assert!(html.contains("lucide.css"));
        assert!(!html.contains("favicon"));
    }

    #[test]
    fn test_about_renders_skill_bars() {
        let html = render(|| view! { <About /> });
        assert!(html.contains("Solution Architect"));
        assert!(html.contains("width: 90%"));
        assert!(html.contains("width: 85%"));
        assert!(html.contains("width: 80%"));
    }

    #[test]
    fn test_projects_render_every_card() {
        let html = render(|| view! { <Projects /> });
        assert!(html.contains("Featured Projects"));
        for title in ["E-Commerce Platform", "AI Task Manager", "Real-time Analytics Dashboard"] {
            assert!(html.contains(title), "missing card {title}");
        }
        assert!(html.contains("D3.js"));
    }

    #[test]
    fn test_contact_renders_idle_form() {
        let html = render(|| {
            provide_context(ContactTiming::default());
            view! { <Contact /> }
        });
        assert!(html.contains("Feel free to connect"));
        assert!(html.contains("Send Message"));
        assert!(html.contains("required"));
        assert!(!html.contains(SUCCESS_NOTICE));
    }
}
