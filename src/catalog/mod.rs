mod builtin;
mod persistence;
mod provider;

pub use builtin::builtin_foods;
pub use persistence::{load_foods, save_foods};
pub use provider::{CandidateProvider, LocalCatalog, collect_candidate_pool, search_terms};
