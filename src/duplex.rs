//! Bidirectional role composition.
//!
//! Some concrete systems are simultaneously the origin of one pipeline and
//! the target of another. [`Duplex`] lets a pair of capability values travel
//! as a single value implementing both [`Source`] and [`Destination`],
//! forwarding each call to the matching half. It adds no behavior of its own
//! and the two halves share no state.
//!
//! Combined with the `&mut T` capability impls, a `Duplex` can also be built
//! over borrowed halves, leaving ownership with the caller:
//!
//! ```rust
//! use relay_engine::duplex::Duplex;
//! use relay_engine::mem::{VecSource, VecStore};
//!
//! let mut source = VecSource::new(vec![1, 2, 3]);
//! let mut store: VecStore<i32> = VecStore::new();
//!
//! let link = Duplex::new(&mut source, &mut store);
//! drop(link);
//!
//! // Halves are still ours.
//! assert_eq!(source.remaining(), 3);
//! assert!(store.is_empty());
//! ```

use crate::capability::{Destination, Pulled, Source};
use crate::error::{SourceError, StoreError};

/// One value exposing both capabilities by delegation.
///
/// `pull` goes to the `S` half, `store` to the `D` half.
#[derive(Debug, Clone)]
pub struct Duplex<S, D> {
    source: S,
    destination: D,
}

impl<S, D> Duplex<S, D> {
    /// Combine a source half and a destination half.
    pub fn new(source: S, destination: D) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Take the halves back.
    pub fn into_parts(self) -> (S, D) {
        (self.source, self.destination)
    }
}

impl<S: Source, D> Source for Duplex<S, D> {
    type Record = S::Record;

    fn pull(&mut self) -> Result<Pulled<Self::Record>, SourceError> {
        self.source.pull()
    }
}

impl<S, D: Destination> Destination for Duplex<S, D> {
    type Record = D::Record;

    fn store(&mut self, record: Self::Record) -> Result<(), StoreError> {
        self.destination.store(record)
    }
}
