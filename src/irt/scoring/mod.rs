//! scoring — post-fit consumption of a fitted item bank.
//!
//! Purpose
//! -------
//! Everything that happens after calibration: Expected A Posteriori trait
//! estimation for new response vectors ([`eap`]) and Fisher-information
//! diagnostics over the trait range ([`information`]).
//!
//! Key behaviors
//! -------------
//! - [`eap::score`] turns one response vector plus a fitted bank into a
//!   scalar trait estimate via the posterior mean over the quadrature
//!   grid, with boundary validation of caller-supplied input.
//! - [`item_information`] / [`test_information`] quantify measurement
//!   precision at any trait level from the fitted parameters alone.
//!
//! Invariants & assumptions
//! ------------------------
//! - The item bank is read-only here; scoring never mutates parameters.
//! - The same quadrature grid used for fitting should be used for scoring
//!   so prior discretization is consistent across the pipeline.

pub mod eap;
pub mod information;

pub use self::eap::score;
pub use self::information::{item_information, test_information};
