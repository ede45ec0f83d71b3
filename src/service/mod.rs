//! AccountService: account operations over the registry, plus payload validation.

mod account;
mod validation;
pub use account::AccountService;
pub use validation::RequestValidator;
