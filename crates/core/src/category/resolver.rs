//! Account code resolution.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::Category;

/// Known account codes and their categories.
static ACCOUNT_CODE_CATEGORIES: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    HashMap::from([
        // Expenses (election campaign)
        ("EXP_PERSONNEL_ELEC", Category::Personnel),
        ("EXP_BUILDING_ELEC", Category::Building),
        ("EXP_COMMUNICATION_ELEC", Category::Communication),
        ("EXP_TRANSPORT_ELEC", Category::Transportation),
        ("EXP_PRINTING_ELEC", Category::Printing),
        ("EXP_ADVERTISING_ELEC", Category::Advertising),
        ("EXP_STATIONERY_ELEC", Category::Stationery),
        ("EXP_FOOD_ELEC", Category::Food),
        ("EXP_LODGING_ELEC", Category::Lodging),
        ("EXP_MISC_ELEC", Category::Miscellaneous),
        // Income
        ("REV_SELF_FINANCING", Category::OtherIncome),
        ("REV_LOAN_ELEC", Category::OtherIncome),
        ("REV_DONATION_INDIVIDUAL_ELEC", Category::Donation),
        ("REV_DONATION_POLITICAL_ELEC", Category::Donation),
        ("REV_MISC_ELEC", Category::OtherIncome),
    ])
});

/// Derives the disclosure category of an account code.
///
/// Total over all inputs: absent, empty, and unrecognized codes map to
/// [`Category::Miscellaneous`].
#[must_use]
pub fn derive_category(account_code: Option<&str>) -> Category {
    let Some(code) = account_code.filter(|code| !code.is_empty()) else {
        return Category::Miscellaneous;
    };

    if let Some(category) = ACCOUNT_CODE_CATEGORIES.get(code) {
        return *category;
    }

    if code.starts_with("REV_") {
        if code.contains("DONATION") {
            return Category::Donation;
        }
        return Category::OtherIncome;
    }

    // EXP_ and anything else
    Category::Miscellaneous
}

/// Display name for a category code string.
///
/// Unknown codes are returned unchanged.
#[must_use]
pub fn category_display_name(code: &str) -> &str {
    match code.parse::<Category>() {
        Ok(category) => category.display_name(),
        Err(_) => code,
    }
}

/// A category together with the name shown for it in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    /// Derived category.
    pub category: Category,
    /// Catalog name for the account code, or the category's static name.
    pub name: String,
}

/// Resolves account codes against the static table and an account-code catalog.
///
/// The catalog holds the display names loaded for one report build; an entry
/// for an exact account code overrides the category's static display name.
#[derive(Debug, Clone, Default)]
pub struct CategoryResolver {
    catalog: HashMap<String, String>,
}

impl CategoryResolver {
    /// Creates a resolver over a code → display name catalog.
    #[must_use]
    pub fn new(catalog: HashMap<String, String>) -> Self {
        Self { catalog }
    }

    /// Resolves an account code to its category and display name.
    #[must_use]
    pub fn resolve(&self, account_code: Option<&str>) -> ResolvedCategory {
        let category = derive_category(account_code);
        let name = account_code
            .filter(|code| !code.is_empty())
            .and_then(|code| self.catalog.get(code))
            .cloned()
            .unwrap_or_else(|| category.display_name().to_string());

        ResolvedCategory { category, name }
    }
}
