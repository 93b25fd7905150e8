use std::fs;

use listmatch_model::{Listing, ProductGroup};
use listmatch_output::{write_jsonl, write_jsonl_file};
use tempfile::TempDir;

fn render(groups: &[ProductGroup]) -> String {
    let mut buffer = Vec::new();
    write_jsonl(&mut buffer, groups).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn group_line_keeps_field_order() {
    let groups = vec![ProductGroup {
        product_name: "Nikon D90".to_string(),
        listings: vec![
            Listing::new("Nikon D90 Body Only", Some("Nikon Inc")).with_price("USD", "499.99"),
        ],
    }];
    insta::assert_snapshot!(render(&groups).trim_end(), @r#"{"product_name":"Nikon D90","listings":[{"title":"Nikon D90 Body Only","manufacturer":"Nikon Inc","currency":"USD","price":"499.99"}]}"#);
}

#[test]
fn missing_fields_stay_null_and_unicode_is_unescaped() {
    let groups = vec![ProductGroup {
        product_name: "Sony DSC-W310".to_string(),
        listings: vec![
            Listing::new("Sony Cyber-shot DSC-W310 – Schwarz", None),
            Listing::new("Sony DSC-W310", Some("Sony")).with_price("EUR", 79.5),
        ],
    }];
    insta::assert_snapshot!(render(&groups).trim_end(), @r#"{"product_name":"Sony DSC-W310","listings":[{"title":"Sony Cyber-shot DSC-W310 – Schwarz","manufacturer":null,"currency":null,"price":null},{"title":"Sony DSC-W310","manufacturer":"Sony","currency":"EUR","price":79.5}]}"#);
}

#[test]
fn file_output_round_trips_through_serde() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.txt");

    let groups = vec![ProductGroup {
        product_name: "Canon PowerShot A100".to_string(),
        listings: vec![Listing::new("Canon PowerShot A100 Black", Some("Canon"))],
    }];
    assert_eq!(write_jsonl_file(&path, &groups).unwrap(), 1);

    let text = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(value["product_name"], "Canon PowerShot A100");
    assert_eq!(value["listings"][0]["title"], "Canon PowerShot A100 Black");
}
