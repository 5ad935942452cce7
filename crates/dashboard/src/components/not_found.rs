use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewprint::Icon;

/// Rendered for any path outside the route table. Does not redirect.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();
    let path = location.map(|location| location.path().to_string());
    use_effect_with(path.clone(), |path| {
        if let Some(path) = path {
            log::warn!("No page registered for {path}");
        }
        || ()
    });
    html! {
        <section class="page" data-page={Route::NotFound.page_id()}>
            <h3><Icon icon={Icon::Error} />{" Page not found"}</h3>
            if let Some(path) = path {
                <p>{"Nothing is registered at "}<code>{path}</code>{"."}</p>
            }
            <Link<Route> to={Route::Home}>{"Back to the dashboard"}</Link<Route>>
        </section>
    }
}
