pub mod assistant_service;
pub mod completion_service;
pub mod fallback_plan;
pub mod plan_service;
