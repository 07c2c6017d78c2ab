pub mod cursor;
pub mod gauge;
pub mod reveal;
