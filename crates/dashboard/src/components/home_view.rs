//! Landing page, shown at `/` and when the app starts without navigation.

use crate::{
    app::{Route, use_app_config},
    platform::Listing,
};
use strum::IntoEnumIterator as _;
use yew::prelude::*;
use yew_router::prelude::*;
use yewprint::{Card, Icon};

#[function_component(HomeView)]
pub fn home_view() -> Html {
    let config = use_app_config();

    let sections = Listing::iter()
        .map(|listing| {
            let cards = Route::TABLE
                .into_iter()
                .filter(|route| matches!(route.listing(), Some((_, l)) if l == listing))
                .map(|route| {
                    let title = route.title();
                    html! {
                        <Card>
                            <Link<Route> to={route}>
                                <Icon icon={listing.icon()} />
                                {" "}{title}
                            </Link<Route>>
                        </Card>
                    }
                })
                .collect::<Html>();
            html! {
                <div class="listing-section">
                    <h4>{listing.to_string()}</h4>
                    <div class="cards">{cards}</div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="page" data-page={Route::Home.page_id()}>
            <h3><Icon icon={Icon::Home} />{" Dashboard"}</h3>
            <p class="api-prefix">
                <span class="badge">{config.environment.to_string()}</span>
                {" API prefix: "}
                <code data-prefix={config.prefix.to_string()}>{config.prefix.as_str()}</code>
            </p>
            {sections}
        </section>
    }
}
