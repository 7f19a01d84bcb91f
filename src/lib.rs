pub mod cli;
pub mod error;
pub mod generator;
pub mod wordlist;

pub use cli::{Cli, Settings};
pub use error::ComposeError;
pub use generator::{generate, write_candidates, Candidates, Composer, DepthBounds};
pub use wordlist::{load_wordlists, LoadFailure, LoadReport};
