use crate::models::TechnologyProfile;

/// Region value meaning a supplier serves every location
pub const UNIVERSAL_REGION: &str = "all";

/// Check whether a supplier's region covers the project location
///
/// Case-insensitive substring test in both directions, or the region contains
/// [`UNIVERSAL_REGION`]. This is a plain substring predicate: an empty location or
/// region matches anything, and "all" also matches inside words such as "Dallas".
#[inline]
pub fn matches_region(location: &str, region: &str) -> bool {
    let location = location.to_lowercase();
    let region = region.to_lowercase();

    region.contains(&location)
        || location.contains(&region)
        || region.contains(UNIVERSAL_REGION)
}

/// Find the first requested technology the supplier's technology field covers
///
/// A requested technology matches when it, or any alias of the catalog profile with
/// the same name, is a case-insensitive substring of `supplier_technology`. The
/// search stops at the first hit, so earlier requests win over later ones.
pub fn find_matching_technology<'a>(
    requested: &'a [String],
    supplier_technology: &str,
    catalog: &[TechnologyProfile],
) -> Option<&'a str> {
    let supplier_technology = supplier_technology.to_lowercase();

    requested
        .iter()
        .find(|tech| {
            if supplier_technology.contains(&tech.to_lowercase()) {
                return true;
            }

            catalog
                .iter()
                .find(|profile| profile.name.to_lowercase() == tech.to_lowercase())
                .map(|profile| {
                    profile
                        .aliases
                        .iter()
                        .any(|alias| supplier_technology.contains(&alias.to_lowercase()))
                })
                .unwrap_or(false)
        })
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplexityRange;

    fn catalog() -> Vec<TechnologyProfile> {
        vec![
            TechnologyProfile::new("Precast system", ComplexityRange::new(4, 8).unwrap(), &["Precast Concrete"]),
            TechnologyProfile::new("Steel Structer", ComplexityRange::new(5, 8).unwrap(), &["Steel Frame", "Steel Structure"]),
        ]
    }

    fn techs(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_region_location_inside_region() {
        assert!(matches_region("Riyadh", "Greater Riyadh Region"));
    }

    #[test]
    fn test_region_inside_location() {
        assert!(matches_region("north riyadh district", "Riyadh"));
    }

    #[test]
    fn test_region_universal_sentinel() {
        assert!(matches_region("Jeddah", "All Regions"));
    }

    #[test]
    fn test_region_mismatch() {
        assert!(!matches_region("Jeddah", "Riyadh"));
    }

    #[test]
    fn test_region_empty_matches_everything() {
        assert!(matches_region("", "Riyadh"));
        assert!(matches_region("Dammam", ""));
    }

    #[test]
    fn test_literal_technology_match() {
        let requested = techs(&["bim"]);
        assert_eq!(
            find_matching_technology(&requested, "BIM Consulting", &catalog()),
            Some("bim")
        );
    }

    #[test]
    fn test_alias_technology_match() {
        let requested = techs(&["Precast system"]);
        assert_eq!(
            find_matching_technology(&requested, "Precast Concrete System", &catalog()),
            Some("Precast system")
        );
    }

    #[test]
    fn test_first_match_wins() {
        let requested = techs(&["Steel Structer", "Precast system"]);
        let matched = find_matching_technology(
            &requested,
            "Steel Frame and Precast Concrete",
            &catalog(),
        );
        assert_eq!(matched, Some("Steel Structer"));
    }

    #[test]
    fn test_no_technology_match() {
        let requested = techs(&["ICF"]);
        assert_eq!(find_matching_technology(&requested, "Tunnel Forms", &catalog()), None);
    }
}
