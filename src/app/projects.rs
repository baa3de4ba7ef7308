use leptos::prelude::*;

use super::icons::Icon;
use crate::content::{Glyph, ProjectEntry, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-100">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">"Featured Projects"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-lg overflow-hidden transform hover:scale-105 transition-all duration-300 hover:shadow-xl">
            <div class="relative group">
                <img src=project.image alt=project.title class="w-full h-48 object-cover" />
                <div class="absolute inset-0 bg-black bg-opacity-0 group-hover:bg-opacity-60 transition-all duration-300 flex items-center justify-center">
                    <div class="opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        <a
                            href=project.link
                            class="text-white px-4 py-2 rounded-full border border-white hover:bg-white hover:text-black transition-colors"
                        >
                            "View Project"
                        </a>
                    </div>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                <p class="text-gray-600 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-indigo-100 text-indigo-600 rounded-full text-sm">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.link
                    class="inline-flex items-center text-indigo-600 hover:text-indigo-500 group"
                >
                    "View Details"
                    <Icon
                        glyph=Glyph::ExternalLink
                        class="ml-1 transform group-hover:translate-x-1 transition-transform"
                    />
                </a>
            </div>
        </div>
    }
}
