use super::*;
use crate::server::service::{cart::load_user_cart, order::OrderService};

mod cancel;
mod checkout;
mod update_status;
