#[doc(hidden)]
pub mod client;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod result;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use client::{HttpRouteClient, RouteService};
#[doc(inline)]
pub use error::RouteError;
#[doc(inline)]
pub use result::{RouteResponse, RouteResult};
