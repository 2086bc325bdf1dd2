pub mod dns;

pub use dns::ResolveNamesUseCase;
