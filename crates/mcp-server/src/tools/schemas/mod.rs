pub mod get_network_request;
pub mod list_network_requests;
