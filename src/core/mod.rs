// Core modules implementing path rules, podspec rendering, and error modeling.
pub mod error;
pub mod path_rules;
pub mod podspec;
pub mod request;
pub mod version;
