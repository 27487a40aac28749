pub mod footer;
pub mod navbar;
pub mod scroll_to_top;

pub use footer::Footer;
pub use navbar::Navbar;
pub use scroll_to_top::ScrollToTop;
