pub mod achievement_seeder;
pub mod dtos;
pub mod queries;
pub mod services;
