//! Commerce platforms and the listings the dashboard manages for them.

use yewprint::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Platform {
    Shopify,
    Momo,
    #[strum(to_string = "PChome")]
    Pchome,
    Yahoo,
    Shopee,
    #[strum(to_string = "Momo Plus")]
    MomoPlus,
}

impl Platform {
    pub fn slug(self) -> &'static str {
        match self {
            Platform::Shopify => "shopify",
            Platform::Momo => "momo",
            Platform::Pchome => "pchome",
            Platform::Yahoo => "yahoo",
            Platform::Shopee => "shopee",
            Platform::MomoPlus => "momo-plus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Listing {
    #[strum(to_string = "Products")]
    Product,
    #[strum(to_string = "Orders")]
    Order,
}

impl Listing {
    pub fn slug(self) -> &'static str {
        match self {
            Listing::Product => "product",
            Listing::Order => "order",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Listing::Product => Icon::Box,
            Listing::Order => Icon::ShoppingCart,
        }
    }

    /// Identifier of the page showing this listing, e.g. `momo-order`.
    pub fn page_id(self, platform: Platform) -> String {
        format!("{}-{}", platform.slug(), self.slug())
    }
}
