//! Minimal compile-time dependency injection.
//!
//! A [`Provider`] owns the leaf dependencies of the application (mostly
//! configuration objects) and a cache of already built services. Every other
//! service implements [`Build`], usually via `#[derive(Build)]`, and is
//! constructed on demand from its fields. Built services are cached, so every
//! service exists at most once per provider.

extern crate self as relay_di;

pub use relay_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Returns the cache of services that have already been built.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provides: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provides for P {}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct Greeting(&'static str);

    #[derive(Debug, Clone, Default)]
    struct Counter(Arc<AtomicUsize>);

    #[derive(Debug, Clone, Build)]
    struct Greeter {
        greeting: Greeting,
        #[state]
        counter: Counter,
    }

    #[derive(Debug, Clone, Build)]
    struct App<G> {
        greeter: G,
    }

    crate::provider! {
        TestProvider { greeting: Greeting, }
    }

    #[test]
    fn build_from_provider() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            greeting: Greeting("hello"),
        };

        let app: App<Greeter> = provider.provide();

        assert_eq!(app.greeter.greeting.0, "hello");
    }

    #[test]
    fn services_are_cached() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            greeting: Greeting("hello"),
        };

        let first: Greeter = provider.provide();
        first.counter.0.fetch_add(1, Ordering::Relaxed);
        let second: Greeter = provider.provide();

        assert_eq!(second.counter.0.load(Ordering::Relaxed), 1);
    }
}
