pub mod digits;
pub mod duration;
pub mod locale;
