//! Site chrome: navbar and footer.

mod footer;
mod navbar;

pub use footer::Footer;
pub use navbar::Navbar;
