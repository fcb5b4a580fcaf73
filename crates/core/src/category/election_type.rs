//! Election type display names.

/// Static display name for an election type code.
///
/// Unknown codes are returned unchanged.
#[must_use]
pub fn election_type_name(code: &str) -> &str {
    match code {
        "HR" => "衆議院議員選挙",
        "HC" => "参議院議員選挙",
        "PG" => "都道府県知事選挙",
        "PA" => "都道府県議会議員選挙",
        "CM" => "市区町村長選挙",
        "GM" => "市区町村議会議員選挙",
        other => other,
    }
}

/// Picks the display name for an election type.
///
/// A catalog name wins; without a catalog row or name the static table applies.
#[must_use]
pub fn resolve_election_type_name(code: &str, catalog_name: Option<&str>) -> String {
    catalog_name.map_or_else(|| election_type_name(code).to_string(), str::to_string)
}
