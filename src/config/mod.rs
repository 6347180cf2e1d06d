pub mod request_configuration;
pub mod request_configuration_holder;
pub mod default_request_configuration;
