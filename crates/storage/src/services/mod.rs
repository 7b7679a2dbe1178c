pub mod clock;
pub mod composition;
pub mod countdown;
pub mod session;
pub mod stats;
