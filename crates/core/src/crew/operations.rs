use crate::storage::CrewRepository;

use super::error::LookupError;
use super::filter::apply_name_filter;
use super::requests::CrewLookupRequest;
use super::types::CrewData;

/// Runs the crew lookup pipeline: validate the request, range-query the
/// store, and apply the optional name filter.
///
/// Without a filter the records come back exactly as the store returned
/// them. With one, each record's packed `names` field is reduced to the
/// matching entries and records left with none are dropped. An empty
/// result is a normal 200 payload, never an error.
pub async fn lookup_crew(
    repo: &dyn CrewRepository,
    request: &CrewLookupRequest,
) -> Result<CrewData, LookupError> {
    let lookup = request.validate()?;

    let records = repo.get_crew(lookup.movie_id, &lookup.role).await?;

    let data = match lookup.name.as_deref() {
        Some(needle) => CrewData::Filtered(apply_name_filter(records, needle)),
        None => CrewData::Raw(records),
    };

    Ok(data)
}
