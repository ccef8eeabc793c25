// crates/cart-core/tests/money_and_menu.rs
use cart_core::{Category, Menu, Money};

#[test]
fn money_parses_wire_amounts_to_cents() {
    assert_eq!(Money::from_units(12.99).map(Money::cents), Some(1299));
    assert_eq!(Money::from_units(0.1 + 0.2).map(Money::cents), Some(30));
    assert_eq!(Money::from_units(4.0).map(Money::cents), Some(400));
    assert_eq!(Money::from_units(-0.01), None);
    assert_eq!(Money::from_units(f64::NAN), None);
}

#[test]
fn money_json_round_trips_as_plain_number() {
    let m: Money = serde_json::from_str("15.99").expect("decodes");
    assert_eq!(m.cents(), 1599);
    assert_eq!(serde_json::to_string(&m).expect("encodes"), "15.99");

    let whole: Money = serde_json::from_str("3").expect("integers decode too");
    assert_eq!(whole.to_string(), "3.00");

    assert!(serde_json::from_str::<Money>("-2.5").is_err());
}

#[test]
fn money_display_pads_cents() {
    assert_eq!(Money::from_cents(5).to_string(), "0.05");
    assert_eq!(Money::from_cents(120).to_string(), "1.20");
    assert_eq!(Money::from_cents(123456).to_string(), "1234.56");
}

#[test]
fn category_labels_and_parsing() {
    assert_eq!(Category::MainCourse.label(), "main course");
    assert_eq!("desserts".parse::<Category>(), Ok(Category::Desserts));
    assert!("appetizers".parse::<Category>().is_err());
    assert_eq!(Category::Desserts.next(), Category::Beverages);
    assert_eq!(Category::Beverages.prev(), Category::Desserts);
}

#[test]
fn menu_decodes_category_keyed_json() {
    let raw = r#"{
        "beverages": [
            {"id": 1, "name": "Coffee", "description": "Fresh brewed coffee", "price": 3.5,
             "category": "beverages", "available": true, "image_url": null}
        ],
        "main_course": [
            {"id": 5, "name": "Margherita Pizza", "description": "Classic", "price": 12.99,
             "category": "main_course", "available": true, "image_url": null}
        ]
    }"#;

    let menu: Menu = serde_json::from_str(raw).expect("menu decodes");
    assert_eq!(menu.len(), 2);
    assert_eq!(menu.items_in(Category::Beverages)[0].name, "Coffee");
    assert!(menu.items_in(Category::Desserts).is_empty());
    assert_eq!(menu.find(5).map(|i| i.price.cents()), Some(1299));
    assert!(menu.find(6).is_none());

    let order: Vec<Category> = menu.categories().collect();
    assert_eq!(order, vec![Category::Beverages, Category::MainCourse]);
}

#[test]
fn null_description_decodes_as_empty() {
    let raw = r#"{
        "desserts": [
            {"id": 9, "name": "Sorbet", "description": null, "price": 4.0,
             "category": "desserts", "available": true, "image_url": null},
            {"id": 10, "name": "Pie", "price": 5.0, "category": "desserts"}
        ]
    }"#;

    let menu: Menu = serde_json::from_str(raw).expect("menu decodes");
    assert_eq!(menu.find(9).map(|i| i.description.as_str()), Some(""));
    assert_eq!(menu.find(10).map(|i| i.description.as_str()), Some(""));
    assert_eq!(menu.len(), 2);
}
