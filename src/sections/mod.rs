//! One component per page section. Each owns its own visibility latch; none
//! depends on another having revealed first.

pub mod ai_technology;
pub mod call_to_action;
pub mod hero;
pub mod problem;
pub mod products;
pub mod risks;
pub mod stakeholders;

pub use ai_technology::AiTechnology;
pub use call_to_action::CallToAction;
pub use hero::Hero;
pub use problem::ProblemStatement;
pub use products::Products;
pub use risks::RisksMitigation;
pub use stakeholders::Stakeholders;
