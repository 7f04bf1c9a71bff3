//! Text helpers shared by the index builder and the search workflow.

pub mod text;
