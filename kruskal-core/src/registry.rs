//! Vertex registry mapping names to dense identifiers.
//!
//! Every distinct name receives the next sequential [`VertexId`] the first
//! time it is seen; later occurrences resolve to the same id. The mapping is
//! append-only for the lifetime of the registry.

use std::{collections::HashMap, fmt, sync::Arc};

/// Dense, zero-based identifier assigned to a vertex on first sight.
///
/// # Examples
/// ```
/// use kruskal_core::VertexId;
///
/// let id = VertexId::new(3);
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named vertex and its assigned identifier.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Vertex {
    id: VertexId,
    name: Arc<str>,
}

impl Vertex {
    /// Returns the vertex identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> VertexId { self.id }

    /// Returns the vertex name.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Append-only mapping from vertex names to dense identifiers.
///
/// # Examples
/// ```
/// use kruskal_core::KruskalBuilder;
///
/// let mut builder = KruskalBuilder::new();
/// builder.ingest("A", "B", "5")?;
/// builder.ingest("A", "C", "3")?;
///
/// let registry = builder.registry();
/// assert_eq!(registry.len(), 3);
/// assert_eq!(registry.get("A").map(|id| id.get()), Some(0));
/// assert_eq!(registry.get("C").map(|id| id.get()), Some(2));
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct VertexRegistry {
    ids: HashMap<Arc<str>, VertexId>,
    vertices: Vec<Vertex>,
}

impl VertexRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, assigning the next sequential id when the
    /// name has not been seen before.
    pub(crate) fn intern(&mut self, name: &str) -> VertexId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }

        let id = VertexId::new(self.vertices.len());
        let name: Arc<str> = Arc::from(name);
        self.ids.insert(Arc::clone(&name), id);
        self.vertices.push(Vertex { id, name });
        id
    }

    /// Looks up the id previously assigned to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /// Returns the vertex registered under `id`.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.get())
    }

    /// Returns the name registered under `id`.
    #[must_use]
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::name)
    }

    /// Returns the number of registered vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.vertices.len() }

    /// Returns `true` when no vertex has been registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Iterates over vertices in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }
}
