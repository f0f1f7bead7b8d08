//! The edit callback handed to an app by its host

/// Receives every new data blob an app produces.
///
/// `context` is whatever the host passed when it mounted the app. It is
/// forwarded untouched.
pub trait EditSink<C> {
    fn on_edit(&self, data: String, context: &C);
}

impl<C, F> EditSink<C> for F
where
    F: Fn(String, &C),
{
    fn on_edit(&self, data: String, context: &C) {
        self(data, context)
    }
}
