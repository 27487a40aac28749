use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod common;
mod config;
mod content;
mod error;
mod hooks;
mod layout;
mod motion;
mod page;
mod sections;
mod text;
mod theme;

use config::{ConfigProvider, SiteConfig};
use page::LandingPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-slate-50">
            <h1 class="text-4xl font-bold text-slate-900">{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <LandingPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::load(), ());

    html! {
        <ConfigProvider config={config}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ConfigProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
