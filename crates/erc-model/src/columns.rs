//! Source column names from the eBay sales report.

pub const ITEM_TITLE: &str = "Item Title";
pub const BUYER_NAME: &str = "Buyer Name";
pub const SHIP_TO_COUNTRY: &str = "Ship To Country";
pub const SHIP_TO_PHONE: &str = "Ship To Phone";

/// Country value kept by the country filter.
pub const UNITED_STATES: &str = "United States";
