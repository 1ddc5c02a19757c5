pub mod bids;
pub mod filters;
pub mod payment;
pub mod validate;
