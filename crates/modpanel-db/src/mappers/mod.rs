//! Model to entity mappers
//!
//! Rows are converted with `TryFrom` where a column carries a domain
//! constraint (positive user id, closed action set) and `From` otherwise.

mod action_log;
mod ban;
mod command;
mod moderator;
mod player;
