use crate::{
    app::use_app_config,
    platform::{Listing, Platform},
};
use yew::prelude::*;
use yewprint::Icon;

#[derive(Properties, PartialEq)]
pub struct PlatformViewProps {
    pub platform: Platform,
    pub listing: Listing,
}

/// Page managing one listing (products or orders) of one platform.
#[function_component(PlatformView)]
pub fn platform_view(PlatformViewProps { platform, listing }: &PlatformViewProps) -> Html {
    let config = use_app_config();
    html! {
        <section class="page" data-page={listing.page_id(*platform)}>
            <h3>
                <Icon icon={listing.icon()} />
                {format!(" {platform} {listing}")}
            </h3>
            <p class="api-prefix">
                {"API prefix: "}
                <code data-prefix={config.prefix.to_string()}>{config.prefix.as_str()}</code>
            </p>
        </section>
    }
}
