pub mod restaurant_mapper;
pub mod transfer_mapper;
