// crates/cart-client/src/components/mod.rs

pub mod cart_panel;
pub mod confirmation;
pub mod help;
pub mod item_form;
pub mod menu_admin;
pub mod menu_list;
pub mod order_list;
pub mod stats_panel;
pub mod status_bar;
