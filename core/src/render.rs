//! The render seam between the coordinator and the view.

use crate::outcome::Outcome;

/// Receives the outcome of the still-current request.
///
/// Invoked at most once per started request, and only when that request's
/// token is still current at settlement time — never for stale or
/// cancelled outcomes. Presentation policy (loading rows, empty-result
/// messages, clearing on outside interaction) lives behind this trait,
/// not in the coordinator; the discard-if-stale guarantee is what makes
/// such policy safe to write without races.
pub trait Renderer<Q, T>: Send + Sync {
    /// Display `outcome` for `query`.
    fn render(&self, query: &Q, outcome: Outcome<T>);
}

impl<Q, T, F> Renderer<Q, T> for F
where
    F: Fn(&Q, Outcome<T>) + Send + Sync,
{
    fn render(&self, query: &Q, outcome: Outcome<T>) {
        self(query, outcome);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn closures_are_renderers() {
        let seen = Mutex::new(Vec::new());
        let renderer = |query: &String, outcome: Outcome<()>| {
            seen.lock().unwrap().push((query.clone(), outcome));
        };
        renderer.render(&"asu".to_owned(), Outcome::Success(vec![]));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
