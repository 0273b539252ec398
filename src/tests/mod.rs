mod analysis_tests;
mod property_tests;
mod utils;
