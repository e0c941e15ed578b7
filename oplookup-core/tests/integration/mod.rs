//! Integration test modules

mod connect_client_tests;
