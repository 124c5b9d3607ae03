pub mod combine;
pub mod convert;
pub mod domain;
