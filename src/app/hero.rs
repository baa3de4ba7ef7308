use leptos::prelude::*;

use super::icons::{Icon, SocialLinks};
use crate::content::{Glyph, OWNER, TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen relative flex items-center justify-center bg-gradient-to-br from-indigo-500 to-purple-600 text-white overflow-hidden">
            <div class="absolute inset-0">
                <div class="absolute inset-0 bg-black opacity-20"></div>
            </div>
            <div class="container mx-auto px-6 z-10 text-center">
                <div class="transform hover:scale-105 transition-transform duration-300">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">{OWNER}</h1>
                    <p class="text-xl md:text-2xl mb-8">{TAGLINE}</p>
                </div>
                <div class="flex justify-center space-x-4 mb-12">
                    <SocialLinks
                        link_class="p-2 hover:text-indigo-200 transition-colors transform hover:scale-110"
                        icon_class="text-2xl"
                    />
                </div>
                <a
                    href="#about"
                    class="animate-bounce inline-block hover:text-indigo-200 transition-colors"
                    aria-label="Scroll to about"
                >
                    <Icon glyph=Glyph::ChevronDown class="text-3xl" />
                </a>
            </div>
        </section>
    }
}
