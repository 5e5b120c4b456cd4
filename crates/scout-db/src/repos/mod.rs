//! Repository modules. Each adds methods to `ScoutDb` via `impl ScoutDb`
//! blocks.

pub mod history;
