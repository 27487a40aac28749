use yew::prelude::*;

/// Shown while the page's loading gate is closed.
#[function_component(LoadingPlaceholder)]
pub fn loading_placeholder() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50" role="status">
            <div class="flex flex-col items-center gap-4">
                <div class="w-12 h-12 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin"></div>
                <span class="text-slate-500 text-sm">{"Loading..."}</span>
            </div>
        </div>
    }
}
