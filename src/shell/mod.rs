// Composition root for the courses module.
//
// - Read config from the environment.
// - Build the course and share it behind one lock.
// - Wire the use case handlers into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
