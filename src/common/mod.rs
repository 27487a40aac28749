pub mod button;
pub mod card;
pub mod loading;
pub mod reveal;
pub mod section_title;

pub use button::Button;
pub use card::Card;
pub use loading::LoadingPlaceholder;
pub use reveal::Reveal;
pub use section_title::SectionTitle;
