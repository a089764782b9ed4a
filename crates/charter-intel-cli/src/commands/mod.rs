pub mod charter;
pub mod markets;
