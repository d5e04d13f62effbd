//! Order service layer

pub mod lenient;
pub mod order;

pub use lenient::LenientOrderService;
pub use order::OrderService;
