//! Wheel-optimised Sieve of Eratosthenes.
//!
//! Primes up to an inclusive bound `N < 2^32 - 1`, one bit per integer:
//!
//! 1. [`wheel::prefilter`] sets 2, 3, 5, 7 and every integer coprime to 30
//!    using the stride pattern `4 2 4 2 4 6 2 6`, no division.
//! 2. [`eliminate::eliminate`] walks surviving primes up to `ceil(sqrt(N))`
//!    and clears each composite exactly once, through its smallest prime
//!    factor, by multiplying only by cofactors that are still set.
//!
//! ```
//! use wheel_sieve::Sieve;
//!
//! let sieve = Sieve::up_to(30).unwrap();
//! assert_eq!(sieve.count(), 10);
//! assert_eq!(sieve.primes().last(), Some(29));
//! ```

pub mod bound;
pub mod eliminate;
pub mod error;
pub mod prompt;
pub mod report;
pub mod sieve;
pub mod store;
pub mod wheel;

pub use bound::Bound;
pub use error::{BoundError, PromptError};
pub use report::Report;
pub use sieve::Sieve;
pub use store::CandidacyStore;
