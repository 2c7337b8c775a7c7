//! Value-or-error outcome of a fallible step.
//!
//! [`Outcome`] holds exactly one of a success payload `T` or an error payload
//! `E`. A channel that carries no information is written as `()`, so the
//! four payload shapes (`Outcome<T, E>`, `Outcome<T, ()>`, `Outcome<(), E>`
//! and `Outcome<(), ()>`) are all the same type and share one set of
//! combinators.
//!
//! Initialization code is written as a chain:
//!
//! ```
//! use common::outcome::Outcome;
//!
//! fn open(width: u32) -> Outcome<u32, ()> {
//!     if width == 0 { Outcome::Err(()) } else { Outcome::Ok(width) }
//! }
//!
//! let area = open(800)
//!     .and_then(|w| open(600).map(|h| w * h))
//!     .expect("cannot open surface");
//! assert_eq!(area, 480_000);
//! ```

/// Panic message of [`Outcome::unwrap`] on an error-tagged outcome.
pub const UNWRAP_ON_ERR: &str = "unwrap on error result";

/// Panic message of [`Outcome::unwrap_err`] on a success-tagged outcome.
pub const UNWRAP_ERR_ON_OK: &str = "unwrap_err on success result";

/// Outcome of a fallible operation.
#[must_use = "this `Outcome` may be an error, which should be handled"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// Success-tagged.
    Ok(T),
    /// Error-tagged.
    Err(E),
}

/// An outcome whose error channel carries nothing.
pub type Maybe<T> = Outcome<T, ()>;

/// Types that can stand in for an [`Outcome`] as the return value of a
/// chained step.
///
/// This is the bound on [`Outcome::and_then`] and [`Outcome::or_else`]: the
/// step must produce an outcome-like value, and the channel the combinator
/// does not operate on must keep its type.
pub trait IntoOutcome {
    /// Success payload.
    type Value;
    /// Error payload.
    type Error;

    fn into_outcome(self) -> Outcome<Self::Value, Self::Error>;
}

impl<T, E> IntoOutcome for Outcome<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> IntoOutcome for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is success-tagged.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the outcome is error-tagged.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UNWRAP_ON_ERR`] if the outcome is error-tagged.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{UNWRAP_ON_ERR}"),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the outcome is error-tagged.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{message}"),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UNWRAP_ERR_ON_OK`] if the outcome is success-tagged.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(_) => panic!("{UNWRAP_ERR_ON_OK}"),
            Outcome::Err(error) => error,
        }
    }

    /// Transforms the success payload, passing an error through untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error payload, passing a success through untouched.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chains another fallible step onto a success.
    ///
    /// `f` is only called on a success-tagged outcome; an error is propagated
    /// as-is. The step must report errors of the same type `E`.
    #[inline]
    pub fn and_then<R, F>(self, f: F) -> Outcome<R::Value, E>
    where
        F: FnOnce(T) -> R,
        R: IntoOutcome<Error = E>,
    {
        match self {
            Outcome::Ok(value) => f(value).into_outcome(),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a recovery step onto an error.
    ///
    /// `f` is only called on an error-tagged outcome; a success is passed
    /// through as-is. The step must produce successes of the same type `T`.
    #[inline]
    pub fn or_else<R, F>(self, f: F) -> Outcome<T, R::Error>
    where
        F: FnOnce(E) -> R,
        R: IntoOutcome<Value = T>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => f(error).into_outcome(),
        }
    }

    /// Converts into an [`Option`] of the success payload, discarding any error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Converts into an [`Option`] of the error payload, discarding any success.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match *self {
            Outcome::Ok(ref value) => Outcome::Ok(value),
            Outcome::Err(ref error) => Outcome::Err(error),
        }
    }

    /// Converts into a [`Result`] so that `?` can be used on it.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T> Outcome<T, ()> {
    /// An empty [`Maybe`].
    #[inline]
    pub const fn none() -> Self {
        Outcome::Err(())
    }

    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Err(()),
        }
    }

    /// Attaches an error payload to an empty [`Maybe`].
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        self.map_err(|()| error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Option<T>> for Outcome<T, ()> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Outcome::from_option(option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn step_positive(value: i32) -> Outcome<i32, String> {
        if value < 0 {
            Outcome::Err(format!("{value} is negative"))
        } else {
            Outcome::Ok(value)
        }
    }

    #[test]
    fn test_tags_are_exclusive() {
        let ok: Outcome<i32, String> = Outcome::Ok(3);
        assert!(ok.is_ok());
        assert!(!ok.is_err());

        let err: Outcome<i32, String> = Outcome::Err("no".to_string());
        assert!(err.is_err());
        assert!(!err.is_ok());
    }

    #[test]
    fn test_unwrap_round_trip() {
        assert_eq!(Outcome::<_, String>::Ok(42).unwrap(), 42);
        assert_eq!(Outcome::<i32, _>::Err("bad").unwrap_err(), "bad");
        assert_eq!(Outcome::<_, ()>::Ok("x").expect("should hold"), "x");
    }

    #[test]
    #[should_panic(expected = "unwrap on error result")]
    fn test_unwrap_on_err_panics() {
        let outcome: Outcome<i32, &str> = Outcome::Err("boom");
        outcome.unwrap();
    }

    #[test]
    #[should_panic(expected = "unwrap_err on success result")]
    fn test_unwrap_err_on_ok_panics() {
        let outcome: Outcome<i32, &str> = Outcome::Ok(1);
        outcome.unwrap_err();
    }

    #[test]
    #[should_panic(expected = "cannot create window")]
    fn test_expect_carries_message() {
        let outcome: Outcome<u32, ()> = Outcome::Err(());
        outcome.expect("cannot create window");
    }

    #[test]
    fn test_map_laws() {
        let outcome: Outcome<i32, String> = Outcome::Ok(7);
        assert_eq!(outcome.clone().map(|v| v).unwrap(), 7);

        let f = |v: i32| v + 1;
        let g = |v: i32| v * 3;
        assert_eq!(
            outcome.clone().map(f).map(g).unwrap(),
            outcome.map(|v| g(f(v))).unwrap()
        );
    }

    #[test]
    fn test_map_err_skips_success() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, String> = Outcome::Ok(9);
        let mapped = outcome.map_err(|e| {
            calls.set(calls.get() + 1);
            e.len()
        });
        assert_eq!(mapped, Outcome::Ok(9));
        assert_eq!(calls.get(), 0);

        let failed: Outcome<i32, &str> = Outcome::Err("four");
        assert_eq!(failed.map_err(str::len).unwrap_err(), 4);
    }

    #[test]
    fn test_and_then_short_circuits() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, String> = Outcome::Err("first".to_string());
        let chained = outcome.and_then(|v| {
            calls.set(calls.get() + 1);
            Outcome::<i32, String>::Ok(v * 2)
        });
        assert_eq!(chained.unwrap_err(), "first");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_and_then_propagates() {
        let outcome: Outcome<i32, String> = Outcome::Ok(-4);
        assert_eq!(outcome.and_then(step_positive), step_positive(-4));

        let outcome: Outcome<i32, String> = Outcome::Ok(4);
        assert_eq!(outcome.and_then(step_positive), Outcome::Ok(4));
    }

    #[test]
    fn test_and_then_accepts_std_result() {
        let outcome: Outcome<&str, std::num::ParseIntError> = Outcome::Ok("12");
        let parsed = outcome.and_then(str::parse::<u8>);
        assert_eq!(parsed, Outcome::Ok(12));
    }

    #[test]
    fn test_or_else_is_dual() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, String> = Outcome::Ok(5);
        let recovered = outcome.or_else(|_| {
            calls.set(calls.get() + 1);
            Outcome::<i32, ()>::Ok(0)
        });
        assert_eq!(recovered, Outcome::Ok(5));
        assert_eq!(calls.get(), 0);

        let failed: Outcome<i32, String> = Outcome::Err("lost".to_string());
        let recovered = failed.or_else(|e| Outcome::<i32, ()>::Ok(e.len() as i32));
        assert_eq!(recovered, Outcome::Ok(4));
    }

    #[test]
    fn test_three_step_chain() {
        let doubled = Cell::new(0);
        let step_double = |v: i32| {
            doubled.set(doubled.get() + 1);
            Outcome::<i32, String>::Ok(v * 2)
        };

        let text = Outcome::<i32, String>::Ok(5)
            .and_then(step_positive)
            .and_then(step_double)
            .map(|v| v.to_string());
        assert_eq!(text, Outcome::Ok("10".to_string()));
        assert_eq!(doubled.get(), 1);

        let text = Outcome::<i32, String>::Ok(-1)
            .and_then(step_positive)
            .and_then(step_double)
            .map(|v| v.to_string());
        assert_eq!(text.unwrap_err(), "-1 is negative");
        assert_eq!(doubled.get(), 1);
    }

    #[test]
    fn test_unit_payload_shapes() {
        let value_only: Outcome<u32, ()> = Outcome::Ok(3);
        assert_eq!(value_only.map(|v| v + 1).unwrap(), 4);
        Outcome::<u32, ()>::Err(()).unwrap_err();

        let error_only: Outcome<(), &str> = Outcome::Ok(());
        assert_eq!(error_only.map(|()| "ready").unwrap(), "ready");
        let error_only: Outcome<(), &str> = Outcome::Err("down");
        assert_eq!(error_only.map_err(str::len), Outcome::Err(4));

        let flag: Outcome<(), ()> = Outcome::Ok(());
        assert!(flag.is_ok());
        flag.unwrap();
        let flag: Outcome<(), ()> = Outcome::Err(());
        flag.unwrap_err();

        let discarded: Outcome<(), String> = Outcome::<i32, String>::Ok(1).map(|_| ());
        assert_eq!(discarded, Outcome::Ok(()));
    }

    #[test]
    #[should_panic(expected = "unwrap_err on success result")]
    fn test_unwrap_err_on_unit_success_panics() {
        let flag: Outcome<(), ()> = Outcome::Ok(());
        flag.unwrap_err();
    }

    #[test]
    fn test_unit_steps_chain() {
        let steps = Cell::new(0);
        let step = || {
            steps.set(steps.get() + 1);
            Outcome::<(), ()>::Ok(())
        };

        let done = step().and_then(|()| step()).and_then(|()| step());
        assert!(done.is_ok());
        assert_eq!(steps.get(), 3);

        let failed = Outcome::<(), ()>::Err(()).and_then(|()| step());
        assert!(failed.is_err());
        assert_eq!(steps.get(), 3);
    }

    #[test]
    fn test_maybe_conversions() {
        let some: Maybe<u8> = Some(3).into();
        assert_eq!(some, Outcome::Ok(3));
        let none: Maybe<u8> = Outcome::none();
        assert!(none.is_err());
        assert_eq!(Maybe::from_option(None::<u8>), Outcome::none());

        assert_eq!(none.ok_or("missing"), Outcome::Err("missing"));
        assert_eq!(some.ok_or("missing"), Outcome::Ok(3));
    }

    #[test]
    fn test_result_interop() {
        let outcome = Outcome::from(Ok::<u8, String>(1));
        assert_eq!(outcome.as_ref(), Outcome::Ok(&1));
        assert_eq!(outcome.clone().ok(), Some(1));
        assert_eq!(outcome.clone().err(), None);

        let result: Result<u8, String> = outcome.into();
        assert_eq!(result, Ok(1));

        fn question_mark() -> Result<u8, &'static str> {
            let value = Outcome::<u8, &str>::Err("stop").into_result()?;
            Ok(value + 1)
        }
        assert_eq!(question_mark(), Err("stop"));
    }
}
