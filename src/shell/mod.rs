// Composition root for the ticket_sales bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire stores, catalog and the checkout handler into the router.

pub mod config;
pub mod http;
pub mod state;

#[cfg(test)]
pub mod test_support;
