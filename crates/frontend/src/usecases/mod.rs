pub mod u601_fetch_deals;
pub mod u602_import_menus;
