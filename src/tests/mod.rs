mod app_tests;
mod scenario_tests;
