//! Tests for category derivation.

use std::collections::HashMap;

use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("EXP_PERSONNEL_ELEC", Category::Personnel)]
#[case("EXP_BUILDING_ELEC", Category::Building)]
#[case("EXP_COMMUNICATION_ELEC", Category::Communication)]
#[case("EXP_TRANSPORT_ELEC", Category::Transportation)]
#[case("EXP_PRINTING_ELEC", Category::Printing)]
#[case("EXP_ADVERTISING_ELEC", Category::Advertising)]
#[case("EXP_STATIONERY_ELEC", Category::Stationery)]
#[case("EXP_FOOD_ELEC", Category::Food)]
#[case("EXP_LODGING_ELEC", Category::Lodging)]
#[case("EXP_MISC_ELEC", Category::Miscellaneous)]
#[case("REV_SELF_FINANCING", Category::OtherIncome)]
#[case("REV_LOAN_ELEC", Category::OtherIncome)]
#[case("REV_DONATION_INDIVIDUAL_ELEC", Category::Donation)]
#[case("REV_DONATION_POLITICAL_ELEC", Category::Donation)]
#[case("REV_MISC_ELEC", Category::OtherIncome)]
fn test_known_account_codes(#[case] code: &str, #[case] expected: Category) {
    assert_eq!(derive_category(Some(code)), expected);
}

#[rstest]
#[case("REV_DONATION_CORPORATE", Category::Donation)]
#[case("REV_PARTY_DONATION_GRANT", Category::Donation)]
#[case("REV_INTEREST", Category::OtherIncome)]
#[case("REV_", Category::OtherIncome)]
#[case("EXP_UTILITIES", Category::Miscellaneous)]
#[case("EXP_DONATION_PAID", Category::Miscellaneous)]
#[case("ASSET_CASH", Category::Miscellaneous)]
#[case("rev_donation_lowercase", Category::Miscellaneous)]
fn test_prefix_heuristics(#[case] code: &str, #[case] expected: Category) {
    assert_eq!(derive_category(Some(code)), expected);
}

#[test]
fn test_absent_or_empty_code_is_miscellaneous() {
    assert_eq!(derive_category(None), Category::Miscellaneous);
    assert_eq!(derive_category(Some("")), Category::Miscellaneous);
}

#[rstest]
#[case(Category::Personnel, "personnel", "人件費")]
#[case(Category::Building, "building", "家屋費")]
#[case(Category::Communication, "communication", "通信費")]
#[case(Category::Transportation, "transportation", "交通費")]
#[case(Category::Printing, "printing", "印刷費")]
#[case(Category::Advertising, "advertising", "広告費")]
#[case(Category::Stationery, "stationery", "文具費")]
#[case(Category::Food, "food", "食糧費")]
#[case(Category::Lodging, "lodging", "休泊費")]
#[case(Category::Miscellaneous, "miscellaneous", "雑費")]
#[case(Category::OtherIncome, "other_income", "その他の収入")]
#[case(Category::Donation, "donation", "寄附")]
fn test_category_codes_and_names(
    #[case] category: Category,
    #[case] code: &str,
    #[case] name: &str,
) {
    assert_eq!(category.code(), code);
    assert_eq!(category.display_name(), name);
    assert_eq!(code.parse::<Category>().unwrap(), category);
    assert_eq!(category_display_name(code), name);
    assert_eq!(
        serde_json::to_string(&category).unwrap(),
        format!("\"{code}\"")
    );
}

#[test]
fn test_unknown_category_name_falls_back_to_code() {
    assert_eq!(category_display_name("subsidy"), "subsidy");
    assert!("subsidy".parse::<Category>().is_err());
}

#[test]
fn test_resolver_uses_static_name_without_catalog() {
    let resolver = CategoryResolver::default();
    let resolved = resolver.resolve(Some("EXP_PERSONNEL_ELEC"));

    assert_eq!(resolved.category, Category::Personnel);
    assert_eq!(resolved.name, "人件費");
}

#[test]
fn test_resolver_catalog_overrides_name_only() {
    let resolver = CategoryResolver::new(HashMap::from([(
        "EXP_PERSONNEL_ELEC".to_string(),
        "人件費（選挙運動）".to_string(),
    )]));

    let resolved = resolver.resolve(Some("EXP_PERSONNEL_ELEC"));
    assert_eq!(resolved.category, Category::Personnel);
    assert_eq!(resolved.name, "人件費（選挙運動）");

    // Other codes are unaffected
    let other = resolver.resolve(Some("EXP_FOOD_ELEC"));
    assert_eq!(other.name, "食糧費");
}

#[test]
fn test_resolver_catalog_names_unknown_codes() {
    let resolver = CategoryResolver::new(HashMap::from([(
        "EXP_RENT_OFFICE".to_string(),
        "事務所賃料".to_string(),
    )]));

    let resolved = resolver.resolve(Some("EXP_RENT_OFFICE"));
    assert_eq!(resolved.category, Category::Miscellaneous);
    assert_eq!(resolved.name, "事務所賃料");
}

#[test]
fn test_resolver_absent_code_ignores_catalog() {
    let resolver = CategoryResolver::new(HashMap::from([(String::new(), "空".to_string())]));

    assert_eq!(resolver.resolve(Some("")).name, "雑費");
    assert_eq!(resolver.resolve(None).name, "雑費");
}

#[rstest]
#[case("HR", "衆議院議員選挙")]
#[case("HC", "参議院議員選挙")]
#[case("PG", "都道府県知事選挙")]
#[case("PA", "都道府県議会議員選挙")]
#[case("CM", "市区町村長選挙")]
#[case("GM", "市区町村議会議員選挙")]
#[case("XX", "XX")]
fn test_election_type_names(#[case] code: &str, #[case] expected: &str) {
    assert_eq!(election_type_name(code), expected);
}

#[test]
fn test_election_type_catalog_wins() {
    assert_eq!(resolve_election_type_name("HR", Some("衆院選")), "衆院選");
    assert_eq!(resolve_election_type_name("HR", None), "衆議院議員選挙");
    assert_eq!(resolve_election_type_name("ZZ", None), "ZZ");
}

proptest! {
    /// Any REV_ code outside the table is income; DONATION anywhere makes it a donation.
    #[test]
    fn prop_rev_prefix(suffix in "[A-Z_]{0,24}") {
        let code = format!("REV_{suffix}");
        let category = derive_category(Some(&code));
        if code.contains("DONATION") {
            prop_assert_eq!(category, Category::Donation);
        } else {
            prop_assert!(matches!(category, Category::OtherIncome));
        }
    }

    /// Unknown EXP_ codes are miscellaneous unless listed in the table.
    #[test]
    fn prop_exp_prefix(suffix in "[A-Z]{1,12}_X") {
        let code = format!("EXP_{suffix}");
        prop_assert_eq!(derive_category(Some(&code)), Category::Miscellaneous);
    }

    /// Resolution never panics and always yields a non-empty name.
    #[test]
    fn prop_resolve_is_total(code in proptest::option::of(".{0,32}")) {
        let resolved = CategoryResolver::default().resolve(code.as_deref());
        prop_assert!(!resolved.name.is_empty());
    }
}
