//! Panic interception.
//!
//! [`run`] wraps the probe in [`std::panic::catch_unwind`], so a panic raised at
//! any depth inside the probe stops at this frame. Interception needs unwinding:
//! a binary built with `panic = "abort"` terminates instead. The default panic
//! hook still reports the panic on stderr before it is caught.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Owned value passed to a panic, as recovered by [`captured`] or [`run`].
pub struct Payload(Box<dyn Any + Send>);

impl Payload {
    /// Wraps a raw payload returned by [`std::panic::catch_unwind`].
    pub fn new(inner: Box<dyn Any + Send>) -> Self {
        Self(inner)
    }

    /// Returns whether the payload holds a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Borrows the payload as a `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Takes the payload as a `T`, handing it back unchanged on a type mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        self.0.downcast::<T>().map(|value| *value).map_err(Self)
    }

    /// Returns the text of a `&'static str` or `String` payload, as produced by `panic!`.
    pub fn message(&self) -> Option<&str> {
        self.downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns the raw boxed payload, e.g. to resume the unwind.
    pub fn into_inner(self) -> Box<dyn Any + Send> {
        self.0
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.debug_tuple("Payload").field(&message).finish(),
            None => f.write_str("Payload(<opaque>)"),
        }
    }
}

/// Result of running a probe under [`run`].
#[derive(Debug)]
pub enum Outcome<T> {
    /// The probe returned normally.
    Returned(T),
    /// The probe panicked with the given payload.
    Aborted(Payload),
}

impl<T> Outcome<T> {
    /// Returns whether the probe returned normally.
    pub fn is_returned(&self) -> bool {
        matches!(self, Outcome::Returned(_))
    }

    /// Returns whether the probe panicked.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Outcome::Aborted(_))
    }

    /// Returns the probe's value, discarding any payload.
    pub fn returned(self) -> Option<T> {
        match self {
            Outcome::Returned(value) => Some(value),
            Outcome::Aborted(_) => None,
        }
    }

    /// Returns the panic payload, discarding any value.
    pub fn aborted(self) -> Option<Payload> {
        match self {
            Outcome::Returned(_) => None,
            Outcome::Aborted(payload) => Some(payload),
        }
    }
}

/// Calls `probe`, converting a panic into [`Outcome::Aborted`].
///
/// The probe is treated as unwind safe: state it mutated before panicking is
/// left as-is for the caller to inspect.
pub fn run<T>(probe: impl FnOnce() -> T) -> Outcome<T> {
    match panic::catch_unwind(AssertUnwindSafe(probe)) {
        Ok(value) => Outcome::Returned(value),
        Err(raw) => Outcome::Aborted(Payload::new(raw)),
    }
}

/// Calls `probe` and returns the panic payload, or `None` if it returned normally.
pub fn captured<T>(probe: impl FnOnce() -> T) -> Option<Payload> {
    run(probe).aborted()
}

/// Returns true if `probe` panics. The panic never propagates past this call.
pub fn panicked<T>(probe: impl FnOnce() -> T) -> bool {
    captured(probe).is_some()
}
