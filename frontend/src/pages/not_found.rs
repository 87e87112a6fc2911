use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("mx-auto", "max-w-xl", "p-8", "space-y-3")}>
            <h2 class={classes!("text-xl", "font-semibold")}>{ "404 - Page not found" }</h2>
            <p>{ "This page does not exist." }</p>
            <Link<Route> to={Route::Requests} classes={classes!("text-[var(--primary)]", "underline")}>
                { "Back to requests" }
            </Link<Route>>
        </main>
    }
}
