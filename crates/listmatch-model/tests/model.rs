use listmatch_model::{Listing, Product, ProductGroup};
use serde_json::json;

#[test]
fn product_reads_source_keys() {
    let product: Product = serde_json::from_str(
        r#"{"product_name":"Samsung_TL240","manufacturer":"Samsung","model":"TL240","family":"","announced-date":"2010-01-05T19:00:00.000-05:00"}"#,
    )
    .expect("parse product");

    assert_eq!(product.name, "Samsung_TL240");
    assert_eq!(product.manufacturer.as_deref(), Some("Samsung"));
    assert_eq!(product.model.as_deref(), Some("TL240"));
    assert_eq!(product.family.as_deref(), Some(""));
    assert!(product.announced_date.is_some());
}

#[test]
fn product_without_optional_fields() {
    let product: Product =
        serde_json::from_str(r#"{"product_name":"Nikon D90"}"#).expect("parse product");
    assert_eq!(product, Product::new("Nikon D90", None));
}

#[test]
fn product_requires_name() {
    let result = serde_json::from_str::<Product>(r#"{"manufacturer":"Nikon"}"#);
    assert!(result.is_err());
}

#[test]
fn listing_tolerates_missing_and_extra_fields() {
    let listing: Listing = serde_json::from_str(r#"{"title":"Nikon D90 Body Only","seller":"x"}"#)
        .expect("parse listing");
    assert_eq!(listing.title(), Some("Nikon D90 Body Only"));
    assert!(listing.manufacturer.is_none());
    assert!(listing.currency.is_none());
    assert!(listing.price.is_none());
}

#[test]
fn listing_serializes_exactly_four_fields_in_order() {
    let listing =
        Listing::new("Nikon D90 Body Only", Some("Nikon Inc")).with_price("USD", "499.99");
    let text = serde_json::to_string(&listing).expect("serialize listing");
    assert_eq!(
        text,
        r#"{"title":"Nikon D90 Body Only","manufacturer":"Nikon Inc","currency":"USD","price":"499.99"}"#
    );

    let bare = serde_json::to_value(Listing::default()).expect("serialize listing");
    assert_eq!(
        bare,
        json!({"title": null, "manufacturer": null, "currency": null, "price": null})
    );
}

#[test]
fn listing_price_passes_through_numbers() {
    let listing: Listing =
        serde_json::from_str(r#"{"title":"x","price":35.99}"#).expect("parse listing");
    assert_eq!(listing.price, Some(json!(35.99)));
}

#[test]
fn product_group_serializes_name_then_listings() {
    let group = ProductGroup {
        product_name: "Nikon D90".to_string(),
        listings: vec![Listing::new("Nikon D90 Body Only", Some("Nikon"))],
    };
    let text = serde_json::to_string(&group).expect("serialize group");
    assert!(text.starts_with(r#"{"product_name":"Nikon D90","listings":[{"title""#));
}
