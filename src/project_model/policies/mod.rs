mod kind_tags;

pub use kind_tags::{KindTagPolicy, DEFAULT_KIND_TAGS};
