//! API handlers. Error conversion from service outcomes to HTTP responses is
//! shared here: the service's tagged kinds pick the status code, the messages
//! travel through unchanged, and anything unclassified collapses into the
//! generic 500.

mod items;
mod system;

pub use items::*;
pub use system::*;

use crate::application::items::ItemServiceError;
use crate::domain::items::ItemValidationError;

use super::error::ApiError;

pub(crate) fn item_to_api(err: ItemServiceError) -> ApiError {
    match err {
        ItemServiceError::Validation(v) => ApiError::bad_request(match v {
            ItemValidationError::MissingRequiredFields => {
                "Missing data, make sure you fill all the required fields."
            }
            ItemValidationError::EmptyUpdate => "Incomplete data for update.",
            ItemValidationError::NumericOutOfRange => {
                "Quantity and unit price must be positive numbers."
            }
        }),
        ItemServiceError::NotFound(message) => ApiError::not_found(message),
        ItemServiceError::Conflict(message) => ApiError::conflict(message),
        ItemServiceError::Repo(repo) => ApiError::internal(repo.to_string()),
    }
}
