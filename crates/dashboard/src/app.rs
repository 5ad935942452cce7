use crate::{
    components::{home_view::HomeView, not_found::NotFound, platform_view::PlatformView},
    config::AppConfig,
    platform::{Listing, Platform},
};
use log::debug;
use std::ops::Deref;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/shopifyProduct")]
    ShopifyProduct,
    #[at("/momoProduct")]
    MomoProduct,
    #[at("/pchomeProduct")]
    PchomeProduct,
    #[at("/yahooProduct")]
    YahooProduct,
    #[at("/shopeeProduct")]
    ShopeeProduct,
    #[at("/momoPlusProduct")]
    MomoPlusProduct,
    #[at("/shopifyOrder")]
    ShopifyOrder,
    #[at("/momoOrder")]
    MomoOrder,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Registered pages in navigation order. `NotFound` is not a page.
    pub const TABLE: [Route; 9] = [
        Route::Home,
        Route::ShopifyProduct,
        Route::MomoProduct,
        Route::PchomeProduct,
        Route::YahooProduct,
        Route::ShopeeProduct,
        Route::MomoPlusProduct,
        Route::ShopifyOrder,
        Route::MomoOrder,
    ];

    pub fn listing(&self) -> Option<(Platform, Listing)> {
        let pair = match self {
            Route::Home | Route::NotFound => return None,
            Route::ShopifyProduct => (Platform::Shopify, Listing::Product),
            Route::MomoProduct => (Platform::Momo, Listing::Product),
            Route::PchomeProduct => (Platform::Pchome, Listing::Product),
            Route::YahooProduct => (Platform::Yahoo, Listing::Product),
            Route::ShopeeProduct => (Platform::Shopee, Listing::Product),
            Route::MomoPlusProduct => (Platform::MomoPlus, Listing::Product),
            Route::ShopifyOrder => (Platform::Shopify, Listing::Order),
            Route::MomoOrder => (Platform::Momo, Listing::Order),
        };
        Some(pair)
    }

    /// Value of the `data-page` attribute on the rendered page root.
    pub fn page_id(&self) -> String {
        match self.listing() {
            Some((platform, listing)) => listing.page_id(platform),
            None if *self == Route::Home => "home".to_string(),
            None => "not-found".to_string(),
        }
    }

    pub fn title(&self) -> String {
        match self.listing() {
            Some((platform, listing)) => format!("{platform} {listing}"),
            None if *self == Route::Home => "Home".to_string(),
            None => "Not Found".to_string(),
        }
    }

    pub fn render(route: Route) -> Html {
        match route.listing() {
            Some((platform, listing)) => html! { <PlatformView {platform} {listing} /> },
            None if route == Route::Home => html! { <HomeView /> },
            None => html! { <NotFound /> },
        }
    }
}

/// Returns the configuration provided by [`App`].
#[hook]
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("should be called inside the app shell")
}

#[derive(PartialEq, Properties)]
pub struct ShellProps {
    pub config: AppConfig,
}

/// Everything below the router: config context, navigation and the routed page.
#[function_component(Shell)]
pub fn shell(ShellProps { config }: &ShellProps) -> Html {
    // Captured on the first render, later props never replace it.
    let app_config = use_state(|| config.clone());

    let route = use_route::<Route>();
    use_effect_with(route, |route| {
        if let Some(route) = route {
            debug!("Rendering {} for {}", route.title(), route.to_path());
        }
        || ()
    });

    html! {
        <ContextProvider<AppConfig> context={app_config.deref().clone()}>
            <div class="container">
                <Nav />
                <main>
                    <Switch<Route> render={Route::render} />
                </main>
            </div>
        </ContextProvider<AppConfig>>
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    let current = use_route::<Route>();
    html! {
        <nav>
            { for Route::TABLE.into_iter().map(|route| {
                let classes = classes!(
                    "nav-link",
                    (current.as_ref() == Some(&route)).then_some("active")
                );
                let title = route.title();
                html! {
                    <Link<Route> to={route} {classes}>
                        {title}
                    </Link<Route>>
                }
            })}
        </nav>
    }
}

#[derive(PartialEq, Properties)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(AppProps { config }: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <Shell config={config.clone()} />
        </BrowserRouter>
    }
}
