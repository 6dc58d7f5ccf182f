mod command;
mod query;

pub use command::OrderCommandService;
pub use query::OrderQueryService;
