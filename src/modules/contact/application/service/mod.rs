pub mod contact_service;
