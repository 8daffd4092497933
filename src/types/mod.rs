mod errors;
pub mod monetary;
mod percent;
#[cfg(test)]
mod tests;

pub use percent::Percent;

pub type UserId = u32;
