use super::*;

#[test]
fn catalog_endpoint_joins_base_url() {
    assert_eq!(catalog_endpoint(), format!("{}/api/menuitem", config::menu_api_base_url()));
}

#[test]
fn menu_endpoint_carries_all_three_parameters() {
    let url = menu_endpoint("7", Mealtime::Dinner, "2026-03-01");
    assert!(url.starts_with(config::menu_api_base_url()));
    assert!(url.ends_with("/api/menu?hallid=7&meal=Dinner&date=2026-03-01"));
}

#[test]
fn menu_failed_message_formats_status() {
    assert_eq!(menu_failed_message(503), "Menu request failed with status 503.");
}
