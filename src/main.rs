// starknode-kit documentation site — Leptos 0.8 CSR

mod components;
mod pages;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use components::Sidebar;
use pages::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Drawer visibility lives in the shell; the sidebar only asks to close.
    let (sidebar_open, set_sidebar_open) = signal(false);

    view! {
        <Router>
            <Sidebar open=sidebar_open on_close=move |_: ()| set_sidebar_open.set(false) />
            <header class="site-header">
                <button
                    class="menu-toggle"
                    on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <span class="site-header-title">"starknode-kit"</span>
            </header>
            <main class="content">
                <div class="content-inner">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/getting-started") view=GettingStartedPage/>
                        <Route path=path!("/installation") view=InstallationPage/>
                        <Route path=path!("/configuration") view=ConfigurationPage/>
                        <Route path=path!("/commands") view=CommandsPage/>
                        <Route path=path!("/clients") view=ClientsPage/>
                        <Route path=path!("/validator") view=ValidatorPage/>
                        <Route path=path!("/requirements") view=RequirementsPage/>
                        <Route path=path!("/contributing") view=ContributingPage/>
                    </Routes>
                </div>
            </main>
        </Router>
    }
}
