mod about;
pub use about::About;

mod study;
pub use study::Study;
