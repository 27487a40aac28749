use yew::prelude::*;

use crate::common::Reveal;

/// (icon, label, value, href)
const CONTACT_TILES: [(&str, &str, &str, &str); 3] = [
    ("📞", "Call Us", "+234 701 234 5678", "tel:+2347012345678"),
    ("✉️", "Email Us", "contact@healthcareai.ng", "mailto:contact@healthcareai.ng"),
    ("📅", "Book a Demo", "Schedule Now", "mailto:contact@healthcareai.ng?subject=Demo"),
];

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section id="contact" class="py-24 px-6 bg-gradient-to-r from-slate-800 to-slate-900 relative overflow-hidden">
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute -top-40 -right-40 w-96 h-96 bg-blue-500 rounded-full opacity-10 blur-3xl"></div>
                <div class="absolute -bottom-40 -left-40 w-96 h-96 bg-blue-400 rounded-full opacity-10 blur-3xl"></div>
            </div>
            <div class="max-w-5xl mx-auto relative z-10">
                <Reveal class="bg-white/10 backdrop-blur-sm border border-white/20 rounded-2xl shadow-2xl p-12 md:p-16 text-center">
                    <div class="inline-flex items-center gap-2 px-4 py-1.5 bg-blue-900/30 rounded-full text-blue-200 text-sm font-medium mb-6">
                        <span>{"📊 Reduce Your MLR Today"}</span>
                    </div>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-white mb-6 leading-tight">
                        {"Ready to Transform Your "}<span class="text-blue-300">{"Healthcare Profitability"}</span>{"?"}
                    </h2>
                    <p class="text-lg text-blue-100 mb-10 max-w-2xl mx-auto">
                        {"Our AI-powered solution helps Nigerian healthcare providers optimize operations, reduce costs, and improve profitability with measurable results."}
                    </p>
                    <div class="flex flex-col md:flex-row items-center justify-center gap-8 mb-12">
                        { for CONTACT_TILES.iter().map(|(icon, label, value, href)| html! {
                            <a key={*label} href={*href} class="flex items-center bg-white/10 px-6 py-4 rounded-xl border border-white/20 hover:bg-white/20 transition-colors">
                                <span class="w-10 h-10 rounded-full bg-blue-500/20 flex items-center justify-center mr-4">{ *icon }</span>
                                <span class="text-left">
                                    <span class="block text-sm text-blue-200 mb-1">{ *label }</span>
                                    <span class="block text-lg font-medium text-white">{ *value }</span>
                                </span>
                            </a>
                        }) }
                    </div>
                    <a
                        href="mailto:contact@healthcareai.ng"
                        class="inline-flex items-center justify-center gap-2 px-8 py-4 bg-blue-500 hover:bg-blue-600 text-white font-medium rounded-xl transition-colors duration-300 shadow-lg text-lg"
                    >
                        {"Get in Touch →"}
                    </a>
                </Reveal>
            </div>
        </section>
    }
}
