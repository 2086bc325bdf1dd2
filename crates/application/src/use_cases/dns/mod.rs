mod resolve_names;

pub use resolve_names::ResolveNamesUseCase;
