//! Records module - categories, typed records and review status.

mod category;
mod lenient;
mod records_model;
mod status;


pub use category::Category;
pub use records_model::{
    BeachRecord, CategoryRecord, CulturalSiteRecord, HotelRecord, RestaurantRecord,
};
pub use status::RecordStatus;
