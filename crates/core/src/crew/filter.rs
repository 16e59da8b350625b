//! Name filtering over packed crew name fields.

use super::types::{FilteredCrewRecord, RawCrewRecord};

/// Splits a packed `names` field on commas and keeps the trimmed entries
/// whose lower-cased form contains `needle_lower`.
///
/// `needle_lower` must already be lower-cased; callers lower-case it once
/// rather than per entry.
pub fn filter_names(names: &str, needle_lower: &str) -> Vec<String> {
    names
        .split(',')
        .map(str::trim)
        .filter(|name| name.to_lowercase().contains(needle_lower))
        .map(str::to_string)
        .collect()
}

/// Applies a name filter across records, dropping any record left with no
/// matching names. Record order is preserved.
pub fn apply_name_filter(records: Vec<RawCrewRecord>, needle: &str) -> Vec<FilteredCrewRecord> {
    let needle_lower = needle.to_lowercase();

    records
        .into_iter()
        .filter_map(|record| {
            let names = filter_names(&record.names, &needle_lower);
            if names.is_empty() {
                None
            } else {
                Some(FilteredCrewRecord {
                    movie_id: record.movie_id,
                    crew_role: record.crew_role,
                    names,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_names_trims_and_matches_case_insensitively() {
        let names = "Brad Pitt, Edward Norton, Helena Bonham Carter";
        assert_eq!(filter_names(names, "brad"), vec!["Brad Pitt"]);
        assert_eq!(filter_names(names, "ton"), vec!["Edward Norton"]);
        assert_eq!(filter_names(names, "zzz"), Vec::<String>::new());
    }

    #[test]
    fn test_filter_names_matches_any_substring_position() {
        assert_eq!(
            filter_names("Samuel L. Jackson, Uma Thurman", "l. jack"),
            vec!["Samuel L. Jackson"]
        );
    }

    #[test]
    fn test_apply_name_filter_drops_empty_records() {
        let records = vec![
            RawCrewRecord::new(550, "actor", "Brad Pitt, Edward Norton"),
            RawCrewRecord::new(550, "director", "David Fincher"),
        ];

        let filtered = apply_name_filter(records, "BRAD");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].crew_role, "actor");
        assert_eq!(filtered[0].names, vec!["Brad Pitt"]);
    }

    #[test]
    fn test_apply_name_filter_keeps_all_matching_entries() {
        let records = vec![RawCrewRecord::new(
            603,
            "director",
            "Lana Wachowski, Lilly Wachowski",
        )];

        let filtered = apply_name_filter(records, "wachowski");
        assert_eq!(
            filtered[0].names,
            vec!["Lana Wachowski", "Lilly Wachowski"]
        );
    }
}
