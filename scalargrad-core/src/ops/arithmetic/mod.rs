// Export foundational arithmetic operations directly
pub mod add;
pub mod mul;
pub mod pow;
pub mod sub;

// Re-export the forward value functions
pub use add::add_forward;
pub use mul::mul_forward;
pub use pow::pow_forward;
pub use sub::sub_forward;
