pub mod revenue_service;
