use leptos::prelude::*;

use super::icons::SocialLinks;
use crate::content::copyright_notice;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-8">
            <div class="container mx-auto px-6 text-center">
                <div class="flex justify-center space-x-4 mb-4">
                    <SocialLinks
                        link_class="hover:text-indigo-400 transition-colors transform hover:scale-110"
                        icon_class="text-xl"
                    />
                </div>
                <p class="text-gray-400">{copyright_notice()}</p>
            </div>
        </footer>
    }
}
