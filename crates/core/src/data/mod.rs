//! Data module - loads the four datasets into a [`Snapshot`](crate::snapshot::Snapshot).

mod data_service;
mod data_traits;


pub use data_service::DataService;
pub use data_traits::DataServiceTrait;
