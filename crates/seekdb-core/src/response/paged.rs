//! Module: response::paged
//! Responsibility: paged list response payload contracts.
//! Does not own: query execution, pagination planning, or the cursor token
//! protocol.

use crate::cursor::Cursor;

///
/// Continuation
///
/// The resume point peeled off a page's lookahead row: the decoded cursor
/// mapping plus its opaque encoded token.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Continuation {
    cursor: Cursor,
    token: String,
}

impl Continuation {
    pub(crate) const fn new(cursor: Cursor, token: String) -> Self {
        Self { cursor, token }
    }

    /// Borrow the primary-key mapping this continuation resumes from.
    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Borrow the opaque text token to hand back to API clients.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Consume this continuation and return the opaque token.
    #[must_use]
    pub fn into_token(self) -> String {
        self.token
    }
}

impl From<Continuation> for Cursor {
    fn from(continuation: Continuation) -> Self {
        continuation.cursor
    }
}

///
/// Page
///
/// One slice of a paginated listing: at most `count` rows in ordering-key
/// order, plus the continuation derived from the lookahead row when more
/// rows exist beyond this page.
///

#[derive(Debug)]
pub struct Page<E> {
    items: Vec<E>,
    next: Option<Continuation>,
}

impl<E> Page<E> {
    pub(crate) const fn new(items: Vec<E>, next: Option<Continuation>) -> Self {
        Self { items, next }
    }

    /// Borrow the page rows.
    #[must_use]
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Borrow the continuation, if more rows exist beyond this page.
    #[must_use]
    pub const fn next(&self) -> Option<&Continuation> {
        self.next.as_ref()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Consume this page and return `(items, next)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<E>, Option<Continuation>) {
        (self.items, self.next)
    }

    /// Consume this page and return the rows only.
    #[must_use]
    pub fn into_items(self) -> Vec<E> {
        self.items
    }
}

impl<E> From<Page<E>> for (Vec<E>, Option<Continuation>) {
    fn from(page: Page<E>) -> Self {
        page.into_parts()
    }
}
