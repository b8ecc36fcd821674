pub mod prd_controller;
pub mod prd_export;
pub mod prd_page;
pub mod prd_prompt;
pub mod prd_service;
pub mod prd_types;
