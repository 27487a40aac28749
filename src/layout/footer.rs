use chrono::Datelike;
use yew::prelude::*;

use crate::content::navigation::{NAV_LINKS, SOLUTION_LINKS};

pub fn copyright_line(year: i32) -> String {
    format!("© {} Magani Health. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let quick_links = NAV_LINKS.iter().filter(|link| link.section.is_some());

    html! {
        <footer class="bg-slate-900 text-slate-300 pt-16 pb-8">
            <div class="max-w-7xl mx-auto px-4 grid gap-10 md:grid-cols-2 lg:grid-cols-4">
                <div>
                    <h3 class="text-2xl font-bold text-white mb-4">{"Magani"}</h3>
                    <p class="text-sm leading-relaxed">
                        {"AI-powered healthcare administration for Nigeria. Verification, analytics and data exchange built for payers, providers and patients."}
                    </p>
                </div>
                <div>
                    <h4 class="text-white font-semibold mb-4">{"Quick Links"}</h4>
                    <ul class="space-y-2 text-sm">
                        { for quick_links.map(|link| html! {
                            <li key={link.id}>
                                <a href={link.href} class="hover:text-white transition-colors">{ link.title }</a>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4 class="text-white font-semibold mb-4">{"Solutions"}</h4>
                    <ul class="space-y-2 text-sm">
                        { for SOLUTION_LINKS.iter().map(|name| html! {
                            <li key={*name}>
                                <a href="#products" class="hover:text-white transition-colors">{ *name }</a>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4 class="text-white font-semibold mb-4">{"Contact"}</h4>
                    <ul class="space-y-2 text-sm">
                        <li>{"Lagos, Nigeria"}</li>
                        <li><a href="mailto:info@magani.health" class="hover:text-white">{"info@magani.health"}</a></li>
                        <li><a href="tel:+2347012345678" class="hover:text-white">{"+234 701 234 5678"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="max-w-7xl mx-auto px-4 mt-12 pt-6 border-t border-slate-800 text-xs text-slate-500 flex flex-col md:flex-row justify-between gap-2">
                <span>{ copyright_line(year) }</span>
                <span>
                    <a href="/privacy" class="hover:text-white mr-4">{"Privacy Policy"}</a>
                    <a href="/terms" class="hover:text-white">{"Terms of Service"}</a>
                </span>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright_line(2026), "© 2026 Magani Health. All rights reserved.");
    }
}
