pub mod services;
pub mod usecases;
