pub mod common_use_cases;
