// handlers/mod.rs - Handler tiers
//
// Public (no auth) -> Protected (bearer JWT, principal in request extensions)
pub mod public;    // Service description and health
pub mod protected; // Report downloads and listings (/v1/*)
