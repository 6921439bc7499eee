use crate::{
    cursor::Cursor,
    obs::{MetricsEvent, sink::record},
    query::{ListError, ListExecutor, Predicate, QuerySource, Storage},
    response::Response,
    traits::EntityKind,
};

///
/// Session
///
/// A handle over one storage backend plus a debug flag that controls
/// executor verbosity. Sessions hold no mutable state and may be created
/// freely per request; the backend is injected by reference.
///

pub struct Session<'a, S: Storage> {
    store: &'a S,
    debug: bool,
}

impl<'a, S: Storage> Session<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            debug: false,
        }
    }

    /// Enable debug logging for subsequent queries in this session.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Get a [`ListExecutor`] for building and executing a paginated listing.
    #[must_use]
    pub const fn list<E>(&self) -> ListExecutor<'a, S, E>
    where
        E: EntityKind,
    {
        ListExecutor::new(self.store, self.debug)
    }

    /// Look up the single row a cursor points at.
    ///
    /// Zero matches is an expected, recoverable not-found (the row may have
    /// been deleted since the cursor was issued). More than one match means
    /// the schema's uniqueness invariant is broken and aborts the call.
    pub fn retrieve<E>(&self, cursor: &Cursor) -> Result<E, ListError>
    where
        E: EntityKind,
    {
        let model = E::MODEL;

        record(MetricsEvent::RetrieveStart {
            entity_path: model.path,
        });

        let pk_fields = model.primary_key_fields()?;
        cursor.check_shape(model.path, &pk_fields)?;

        let source = cursor
            .fields()
            .iter()
            .fold(self.store.query::<E>(), |source, (field, value)| {
                source.filter(Predicate::eq(field.as_str(), value.clone()))
            });

        let result = Response(source.fetch()?).row();

        record(MetricsEvent::RetrieveFinish {
            entity_path: model.path,
            found: result.is_ok(),
        });
        if self.debug {
            tracing::debug!(
                entity = model.path,
                found = result.is_ok(),
                "retrieve executed"
            );
        }

        result.map_err(ListError::from)
    }
}

// Manual Copy + Clone implementations.
// Safe because Session only contains a shared reference and a flag;
// duplicating them does not duplicate the backend.
impl<S: Storage> Copy for Session<'_, S> {}

impl<S: Storage> Clone for Session<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}
