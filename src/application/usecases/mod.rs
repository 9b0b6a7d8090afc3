pub mod authenticate_user;
pub mod demo_login;
pub mod register_user;
pub mod seed_database;
