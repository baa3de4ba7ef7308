use leptos::prelude::*;

use super::icons::Icon;
use crate::content::{SkillEntry, BIO, PORTRAIT_ALT, PORTRAIT_URL, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">"About Me"</h2>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="group">
                        <img
                            src=PORTRAIT_URL
                            alt=PORTRAIT_ALT
                            class="rounded-lg shadow-lg transform group-hover:scale-105 transition-transform duration-300"
                        />
                    </div>
                    <div>
                        <p class="text-lg text-gray-600 mb-6">{BIO[0]}</p>
                        <p class="text-lg text-gray-600 mb-8">{BIO[1]}</p>
                        <div class="space-y-6">
                            {SKILLS.iter().map(|skill| view! { <Skill skill=*skill /> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skill(skill: SkillEntry) -> impl IntoView {
    view! {
        <div class="group">
            <div class="flex items-center mb-2">
                <div class="mr-2 transform group-hover:scale-110 transition-transform">
                    <Icon glyph=skill.icon class="text-2xl" />
                </div>
                <span class="font-medium">{skill.name}</span>
            </div>
            <div class="h-2 bg-gray-200 rounded-full">
                <div
                    class="h-full bg-indigo-600 rounded-full transition-all duration-1000 ease-out"
                    style=skill.bar_style()
                ></div>
            </div>
        </div>
    }
}
