mod error;
mod filter;
mod mock_data;
mod operations;
mod parse;
mod requests;
mod types;

pub use error::{LookupError, ValidationError};
pub use filter::{apply_name_filter, filter_names};
pub use mock_data::seed_crew_records;
pub use operations::lookup_crew;
pub use parse::parse_movie_id;
pub use requests::{CrewLookupRequest, ValidatedLookup};
pub use types::{CrewData, FilteredCrewRecord, RawCrewRecord};
