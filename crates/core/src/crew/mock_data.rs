use super::types::RawCrewRecord;

/// Seed crew records for a handful of well-known films.
///
/// Used by the in-memory backend for demo data and by the xtask seeder to
/// populate a real table. One record per `(movie, role)` pair, names
/// packed comma-separated as the store expects.
pub fn seed_crew_records() -> Vec<RawCrewRecord> {
    vec![
        RawCrewRecord::new(550, "director", "David Fincher"),
        RawCrewRecord::new(
            550,
            "actor",
            "Brad Pitt, Edward Norton, Helena Bonham Carter",
        ),
        RawCrewRecord::new(550, "writer", "Chuck Palahniuk, Jim Uhls"),
        RawCrewRecord::new(27205, "director", "Christopher Nolan"),
        RawCrewRecord::new(
            27205,
            "actor",
            "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page, Tom Hardy",
        ),
        RawCrewRecord::new(603, "director", "Lana Wachowski, Lilly Wachowski"),
        RawCrewRecord::new(
            603,
            "actor",
            "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
        ),
        RawCrewRecord::new(680, "director", "Quentin Tarantino"),
        RawCrewRecord::new(
            680,
            "actor",
            "John Travolta, Samuel L. Jackson, Uma Thurman, Bruce Willis",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_records_have_unique_keys() {
        let records = seed_crew_records();
        for (i, a) in records.iter().enumerate() {
            for b in records.iter().skip(i + 1) {
                assert!(
                    a.movie_id != b.movie_id || a.crew_role != b.crew_role,
                    "duplicate key ({}, {})",
                    a.movie_id,
                    a.crew_role
                );
            }
        }
    }
}
