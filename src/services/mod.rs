pub mod payhero_service;
pub mod phone;
