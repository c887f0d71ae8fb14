//! Client-side collaborators of the gateway: the fetch façade every content
//! consumer goes through, and the presentation-only access gate.

pub mod fetch;
pub mod gate;
