//! Log editor controller, its events and the record list view state.

/// Selection state machine and CRUD action dispatch.
pub mod controller;
/// Events returned by editor actions.
pub mod events;
/// Sort state for the displayed record list.
pub mod table;
