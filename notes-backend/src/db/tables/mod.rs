//! Table modules - each contains `impl Database` blocks for one table

mod notes;
