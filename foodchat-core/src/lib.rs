pub mod intent;
pub mod query;
pub mod search;
pub mod synonyms;

pub use intent::{classify, Intent, SearchIntent};
pub use query::{parse, ParsedQuery};
pub use search::{ScoreWeights, SearchConfig, SearchEngine, SortMode, TagMatch};
