mod command;
mod query;

pub use command::OrderCommandRepository;
pub use query::OrderQueryRepository;
