pub mod close;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logger;
pub mod rpc;
pub mod scanner;
pub mod types;
pub mod utils;

pub use close::CloseTransactionBuilder;
pub use config::Config;
pub use errors::ReclaimError;
pub use rpc::RpcClient;
pub use scanner::AccountScanner;
pub use types::TokenAccountDescriptor;
