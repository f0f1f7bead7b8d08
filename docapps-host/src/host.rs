//! Drives one app instance through load / apply / save cycles

use crate::{app::App, sink::EditSink};
use docapps_common::log_error;
use tracing::{debug, trace};

/// Outcome of a successful [`AppHost::dispatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The action changed the serialized state and the sink was called
    Edited,
    /// The action left the serialized state as it was; the sink was not called
    Unchanged,
}

/// One mounted app: its current data, the host's context and edit sink.
///
/// Every dispatch starts from a fresh `load` of the current data, so no
/// model outlives a single cycle.
pub struct AppHost<A, C, S> {
    app: A,
    data: String,
    context: C,
    sink: S,
}

impl<A, C, S> AppHost<A, C, S>
where
    A: App,
    S: EditSink<C>,
{
    /// Mount `app` on `data`.
    pub fn new(app: A, data: impl Into<String>, context: C, sink: S) -> Self {
        Self {
            app,
            data: data.into(),
            context,
            sink,
        }
    }

    /// The data blob the next cycle will start from.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    /// Take an update notification from the host.
    pub fn update(&mut self, data: impl Into<String>) {
        self.data = data.into();
        trace!(app = A::NAME, len = self.data.len(), "data updated by host");
    }

    /// A fresh working copy of the current data, for rendering.
    pub fn model(&self) -> A::Model {
        self.app.load(&self.data)
    }

    /// Run one load / apply / save cycle for `action`.
    ///
    /// A rejected action, or a model that cannot be printed, is logged at its
    /// severity and returned; neither the stored data nor the sink see
    /// anything in that case. When the action succeeds the new blob becomes
    /// the current data immediately, ahead of the host echoing it back
    /// through [`AppHost::update`].
    pub fn dispatch(&mut self, action: A::Action) -> Result<Dispatch, A::Error> {
        let mut model = self.app.load(&self.data);

        let data = self
            .app
            .apply(&mut model, action)
            .and_then(|()| self.app.save(&model))
            .inspect_err(|err| log_error(A::NAME, err))?;

        if data == self.data {
            debug!(app = A::NAME, "action left data unchanged");
            return Ok(Dispatch::Unchanged);
        }

        debug!(app = A::NAME, len = data.len(), "forwarding edit to host");
        self.data.clone_from(&data);
        self.sink.on_edit(data, &self.context);
        Ok(Dispatch::Edited)
    }
}
