//! The `App` trait implemented by every embeddable app

use docapps_common::Severity;
use std::fmt::Display;

/// An embeddable app: a parse / mutate / print triple over a text blob.
///
/// `load` must never fail. Malformed data degrades to whatever the app
/// treats as its empty state, so the host can always render something.
pub trait App {
    /// Short identifier used in log events
    const NAME: &'static str;

    /// In-memory working copy rebuilt from `data` on every cycle
    type Model;

    /// A user interaction, already translated from UI gestures
    type Action;

    /// Why an action was rejected
    type Error: Severity + Display;

    /// Parse the host's data blob.
    fn load(&self, data: &str) -> Self::Model;

    /// Apply one action to the working copy.
    ///
    /// On error the model may be left untouched or partially updated; the
    /// host discards it either way.
    fn apply(&self, model: &mut Self::Model, action: Self::Action) -> Result<(), Self::Error>;

    /// Print the working copy back into a data blob.
    fn save(&self, model: &Self::Model) -> Result<String, Self::Error>;
}
