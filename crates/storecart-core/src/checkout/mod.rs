//! Checkout module.
//!
//! Contains customer details, order summaries, message formatting, the
//! order channel and the submission flow.

mod channel;
mod customer;
mod flow;
mod message;
mod order;

pub use channel::{ChannelError, OrderChannel, WhatsAppLink};
pub use customer::{CustomerDetails, CustomerForm};
pub use flow::{Checkout, CheckoutError};
pub use message::OrderMessage;
pub use order::{OrderLine, OrderNumber, OrderSummary};
