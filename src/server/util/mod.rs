//! Small pure helpers shared by services.

pub mod email;
pub mod order_number;
pub mod slug;
pub mod token;
